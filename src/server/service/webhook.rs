//! Billing provider webhook handling.
//!
//! Events are verified against the `Stripe-Signature` header and mirrored into the local
//! subscription and payment tables. Events for customers that are not linked to a profile
//! and event types that are not handled are acknowledged and logged so the provider stops
//! redelivering them.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use sha2::Sha256;

use crate::server::{
    data::{
        payment::PaymentRepository, plan::PlanRepository, profile::ProfileRepository,
        subscription::SubscriptionRepository,
    },
    error::AppError,
    model::billing::{
        PaymentStatus, UpsertPaymentParams, UpsertSubscriptionParams, STATUS_CANCELED,
        STATUS_PAST_DUE,
    },
};

type HmacSha256 = Hmac<Sha256>;

/// Maximum accepted age of a signed payload, in seconds.
pub const SIGNATURE_TOLERANCE_SECONDS: u64 = 300;

/// Verifies a `Stripe-Signature` header (`t=<unix>,v1=<hex>[,v1=<hex>...]`).
///
/// The signed message is `"<t>.<payload>"`. Any `v1` entry matching the expected HMAC is
/// accepted.
///
/// # Returns
/// - `Ok(())` - Signature valid and timestamp within tolerance
/// - `Err(AppError::BadRequest)` - Missing, malformed, stale or mismatched signature
pub fn verify_signature(
    payload: &[u8],
    header: Option<&str>,
    secret: &str,
    now: DateTime<Utc>,
) -> Result<(), AppError> {
    let header =
        header.ok_or_else(|| AppError::BadRequest("Missing Stripe-Signature header".to_string()))?;

    let mut timestamp: Option<i64> = None;
    let mut signatures: Vec<Vec<u8>> = Vec::new();
    for part in header.split(',') {
        match part.trim().split_once('=') {
            Some(("t", value)) => timestamp = value.parse().ok(),
            Some(("v1", value)) => {
                if let Ok(bytes) = hex::decode(value) {
                    signatures.push(bytes);
                }
            }
            _ => {}
        }
    }

    let timestamp = timestamp
        .ok_or_else(|| AppError::BadRequest("Malformed Stripe-Signature header".to_string()))?;
    if signatures.is_empty() {
        return Err(AppError::BadRequest(
            "Malformed Stripe-Signature header".to_string(),
        ));
    }

    let age = now.timestamp().checked_sub(timestamp).map(i64::unsigned_abs);
    if !matches!(age, Some(age) if age <= SIGNATURE_TOLERANCE_SECONDS) {
        return Err(AppError::BadRequest(
            "Webhook timestamp outside tolerance".to_string(),
        ));
    }

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| AppError::InternalError(format!("Invalid webhook secret: {}", e)))?;
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);

    let valid = signatures
        .iter()
        .any(|signature| mac.clone().verify_slice(signature).is_ok());
    if !valid {
        return Err(AppError::BadRequest(
            "Invalid webhook signature".to_string(),
        ));
    }

    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct StripeEvent {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: StripeEventData,
}

#[derive(Debug, Deserialize)]
pub struct StripeEventData {
    pub object: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct CheckoutSession {
    client_reference_id: Option<String>,
    customer: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StripeSubscription {
    id: String,
    customer: String,
    status: String,
    current_period_end: Option<i64>,
    #[serde(default)]
    cancel_at_period_end: bool,
    #[serde(default)]
    items: StripeList<SubscriptionItem>,
}

#[derive(Debug, Deserialize)]
struct StripeList<T> {
    data: Vec<T>,
}

impl<T> Default for StripeList<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

#[derive(Debug, Deserialize)]
struct SubscriptionItem {
    price: Option<StripePrice>,
    current_period_end: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StripePrice {
    id: String,
}

impl StripeSubscription {
    fn price_id(&self) -> Option<&str> {
        self.items
            .data
            .first()
            .and_then(|item| item.price.as_ref())
            .map(|price| price.id.as_str())
    }

    /// Newer API versions report the period on the items instead of the subscription.
    fn current_period_end(&self) -> Option<DateTime<Utc>> {
        self.current_period_end
            .or_else(|| {
                self.items
                    .data
                    .first()
                    .and_then(|item| item.current_period_end)
            })
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
    }
}

#[derive(Debug, Deserialize)]
struct StripeInvoice {
    id: String,
    customer: Option<String>,
    subscription: Option<String>,
    amount_paid: Option<i64>,
    amount_due: Option<i64>,
    #[serde(default)]
    currency: String,
}

fn parse_object<T: serde::de::DeserializeOwned>(
    event: &StripeEvent,
) -> Result<T, AppError> {
    serde_json::from_value(event.data.object.clone()).map_err(|e| {
        AppError::BadRequest(format!(
            "Malformed {} payload: {}",
            event.event_type, e
        ))
    })
}

pub struct WebhookService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WebhookService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Parses a verified payload and applies it.
    pub async fn handle_payload(&self, payload: &[u8]) -> Result<(), AppError> {
        let event: StripeEvent = serde_json::from_slice(payload)
            .map_err(|e| AppError::BadRequest(format!("Malformed webhook payload: {}", e)))?;

        self.handle(event).await
    }

    pub async fn handle(&self, event: StripeEvent) -> Result<(), AppError> {
        tracing::debug!("Received webhook event {} ({})", event.id, event.event_type);

        match event.event_type.as_str() {
            "checkout.session.completed" => self.checkout_completed(parse_object(&event)?).await,
            "customer.subscription.created" | "customer.subscription.updated" => {
                self.subscription_changed(parse_object(&event)?, None).await
            }
            "customer.subscription.deleted" => {
                self.subscription_changed(parse_object(&event)?, Some(STATUS_CANCELED))
                    .await
            }
            "invoice.paid" | "invoice.payment_succeeded" => {
                self.invoice(parse_object(&event)?, PaymentStatus::Paid).await
            }
            "invoice.payment_failed" => {
                self.invoice(parse_object(&event)?, PaymentStatus::Failed).await
            }
            other => {
                tracing::info!("Ignoring unhandled webhook event type {}", other);
                Ok(())
            }
        }
    }

    async fn checkout_completed(&self, session: CheckoutSession) -> Result<(), AppError> {
        let profile_repo = ProfileRepository::new(self.db);

        let (Some(reference), Some(customer)) = (session.client_reference_id, session.customer)
        else {
            tracing::warn!("Checkout session without client reference or customer");
            return Ok(());
        };

        let Ok(profile_id) = reference.parse::<i32>() else {
            tracing::warn!("Checkout session with invalid client reference {}", reference);
            return Ok(());
        };

        match profile_repo
            .set_stripe_customer_id(profile_id, customer.clone())
            .await?
        {
            Some(_) => tracing::info!("Linked customer {} to profile {}", customer, profile_id),
            None => tracing::warn!(
                "Checkout session for unknown profile {} (customer {})",
                profile_id,
                customer
            ),
        }

        Ok(())
    }

    async fn subscription_changed(
        &self,
        subscription: StripeSubscription,
        status_override: Option<&str>,
    ) -> Result<(), AppError> {
        let profile_repo = ProfileRepository::new(self.db);
        let plan_repo = PlanRepository::new(self.db);
        let subscription_repo = SubscriptionRepository::new(self.db);

        let Some(profile) = profile_repo
            .find_by_stripe_customer_id(&subscription.customer)
            .await?
        else {
            tracing::warn!(
                "Subscription {} for unknown customer {}",
                subscription.id,
                subscription.customer
            );
            return Ok(());
        };

        let plan_id = match subscription.price_id() {
            Some(price_id) => {
                let plan = plan_repo.find_by_price_id(price_id).await?;
                if plan.is_none() {
                    tracing::warn!(
                        "Subscription {} references unknown price {}",
                        subscription.id,
                        price_id
                    );
                }
                plan.map(|p| p.id)
            }
            None => None,
        };

        let current_period_end = subscription.current_period_end();
        let status = status_override
            .map(str::to_string)
            .unwrap_or(subscription.status);

        let saved = subscription_repo
            .upsert(UpsertSubscriptionParams {
                profile_id: profile.id,
                stripe_subscription_id: subscription.id,
                stripe_customer_id: subscription.customer,
                plan_id,
                status,
                current_period_end,
                cancel_at_period_end: subscription.cancel_at_period_end,
            })
            .await?;

        tracing::info!(
            "Subscription {} of profile {} is now {}",
            saved.stripe_subscription_id,
            saved.profile_id,
            saved.status
        );

        Ok(())
    }

    async fn invoice(&self, invoice: StripeInvoice, status: PaymentStatus) -> Result<(), AppError> {
        let profile_repo = ProfileRepository::new(self.db);
        let payment_repo = PaymentRepository::new(self.db);
        let subscription_repo = SubscriptionRepository::new(self.db);

        let profile = match invoice.customer.as_deref() {
            Some(customer) => profile_repo.find_by_stripe_customer_id(customer).await?,
            None => None,
        };
        if profile.is_none() {
            tracing::warn!(
                "Invoice {} for unknown customer {:?}",
                invoice.id,
                invoice.customer
            );
        }

        let amount_cents = match status {
            PaymentStatus::Paid => invoice.amount_paid.or(invoice.amount_due),
            PaymentStatus::Failed => invoice.amount_due.or(invoice.amount_paid),
        }
        .unwrap_or(0);

        payment_repo
            .upsert(UpsertPaymentParams {
                profile_id: profile.map(|p| p.id),
                stripe_invoice_id: invoice.id.clone(),
                stripe_subscription_id: invoice.subscription.clone(),
                amount_cents,
                currency: invoice.currency.to_lowercase(),
                status,
            })
            .await?;

        if status == PaymentStatus::Failed {
            if let Some(subscription_id) = invoice.subscription.as_deref() {
                if !subscription_repo
                    .set_status(subscription_id, STATUS_PAST_DUE)
                    .await?
                {
                    tracing::warn!(
                        "Payment failed for unknown subscription {}",
                        subscription_id
                    );
                }
            }
        }

        tracing::info!("Recorded {} invoice {}", status.as_str(), invoice.id);

        Ok(())
    }
}
