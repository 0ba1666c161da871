//! Stripe webhook payload fixtures.
//!
//! Builds event bodies in the shape Stripe delivers them and signs them the way
//! Stripe does: `t=<unix>,v1=<hex hmac-sha256 of "<t>.<payload>">`.

use hmac::{Hmac, Mac};
use serde_json::json;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Webhook secret used by tests.
pub const TEST_WEBHOOK_SECRET: &str = "whsec_test_secret";

/// Produces a `Stripe-Signature` header value for `payload`.
pub fn signature_header(secret: &str, payload: &str, timestamp: i64) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("hmac accepts any key size");
    mac.update(format!("{}.{}", timestamp, payload).as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());

    format!("t={},v1={}", timestamp, signature)
}

fn event(event_type: &str, object: serde_json::Value) -> String {
    json!({
        "id": "evt_test",
        "object": "event",
        "type": event_type,
        "data": { "object": object }
    })
    .to_string()
}

/// `checkout.session.completed` linking `customer_id` to `profile_id`.
pub fn checkout_completed_event(profile_id: i32, customer_id: &str) -> String {
    event(
        "checkout.session.completed",
        json!({
            "id": "cs_test",
            "object": "checkout.session",
            "client_reference_id": profile_id.to_string(),
            "customer": customer_id,
        }),
    )
}

/// `customer.subscription.*` event with one item priced at `price_id`.
pub fn subscription_event(
    event_type: &str,
    subscription_id: &str,
    customer_id: &str,
    price_id: &str,
    status: &str,
) -> String {
    event(
        event_type,
        json!({
            "id": subscription_id,
            "object": "subscription",
            "customer": customer_id,
            "status": status,
            "current_period_end": 1_893_456_000_i64,
            "cancel_at_period_end": false,
            "items": {
                "object": "list",
                "data": [
                    { "id": "si_test", "price": { "id": price_id } }
                ]
            }
        }),
    )
}

/// `invoice.*` event for `customer_id` and `subscription_id`.
pub fn invoice_event(
    event_type: &str,
    invoice_id: &str,
    customer_id: &str,
    subscription_id: &str,
    amount_cents: i64,
) -> String {
    event(
        event_type,
        json!({
            "id": invoice_id,
            "object": "invoice",
            "customer": customer_id,
            "subscription": subscription_id,
            "amount_paid": amount_cents,
            "amount_due": amount_cents,
            "currency": "usd",
        }),
    )
}
