use super::*;

/// Tests that a redelivered invoice updates the existing payment row.
///
/// Expected: Ok with one payment row, status paid after the failed attempt
#[tokio::test]
async fn upsert_by_invoice_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let repo = PaymentRepository::new(db);
    let failed = repo
        .upsert(UpsertPaymentParams {
            profile_id: Some(admin.id),
            stripe_invoice_id: "in_1".to_string(),
            stripe_subscription_id: Some("sub_1".to_string()),
            amount_cents: 1999,
            currency: "usd".to_string(),
            status: PaymentStatus::Failed,
        })
        .await?;
    let paid = repo
        .upsert(UpsertPaymentParams {
            profile_id: Some(admin.id),
            stripe_invoice_id: "in_1".to_string(),
            stripe_subscription_id: Some("sub_1".to_string()),
            amount_cents: 1999,
            currency: "usd".to_string(),
            status: PaymentStatus::Paid,
        })
        .await?;

    assert_eq!(failed.id, paid.id);
    assert_eq!(failed.status, "failed");
    assert_eq!(paid.status, "paid");
    assert_eq!(entity::prelude::Payment::find().count(db).await?, 1);

    Ok(())
}
