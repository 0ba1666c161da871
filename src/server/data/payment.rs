//! Payment repository, keyed by the billing provider's invoice id.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::billing::{Payment, UpsertPaymentParams};

pub struct PaymentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PaymentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an invoice outcome; a later event for the same invoice overwrites it.
    pub async fn upsert(&self, params: UpsertPaymentParams) -> Result<Payment, DbErr> {
        let entity = entity::prelude::Payment::insert(entity::payment::ActiveModel {
            profile_id: ActiveValue::Set(params.profile_id),
            stripe_invoice_id: ActiveValue::Set(params.stripe_invoice_id),
            stripe_subscription_id: ActiveValue::Set(params.stripe_subscription_id),
            amount_cents: ActiveValue::Set(params.amount_cents),
            currency: ActiveValue::Set(params.currency),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::payment::Column::StripeInvoiceId)
                .update_columns([
                    entity::payment::Column::ProfileId,
                    entity::payment::Column::StripeSubscriptionId,
                    entity::payment::Column::AmountCents,
                    entity::payment::Column::Currency,
                    entity::payment::Column::Status,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Payment::from_entity(entity))
    }
}
