use super::*;

/// Tests the checkout, subscription and cancellation flow for one admin.
///
/// Expected: customer linked, subscription active on the plan, then canceled
#[tokio::test]
async fn checkout_then_subscription_lifecycle() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let plan = factory::create_plan(db, "price_classroom", Some(30)).await?;
    let service = WebhookService::new(db);

    service
        .handle_payload(stripe::checkout_completed_event(admin.id, "cus_1").as_bytes())
        .await?;
    let linked = ProfileRepository::new(db)
        .find_by_stripe_customer_id("cus_1")
        .await?
        .unwrap();
    assert_eq!(linked.id, admin.id);

    service
        .handle_payload(
            stripe::subscription_event(
                "customer.subscription.created",
                "sub_1",
                "cus_1",
                "price_classroom",
                "active",
            )
            .as_bytes(),
        )
        .await?;

    let subscriptions = SubscriptionRepository::new(db);
    let created = subscriptions.find_latest_for_profile(admin.id).await?.unwrap();
    assert_eq!(created.subscription.plan_id, Some(plan.id));
    assert!(created.subscription.is_active());
    assert!(created.subscription.current_period_end.is_some());

    service
        .handle_payload(
            stripe::subscription_event(
                "customer.subscription.deleted",
                "sub_1",
                "cus_1",
                "price_classroom",
                "active",
            )
            .as_bytes(),
        )
        .await?;

    let canceled = subscriptions.find_by_stripe_id("sub_1").await?.unwrap();
    assert_eq!(canceled.id, created.subscription.id);
    assert_eq!(canceled.status, STATUS_CANCELED);

    Ok(())
}

/// Tests a failed invoice for a known subscription.
///
/// Expected: subscription marked past_due
#[tokio::test]
async fn failed_invoice_marks_subscription_past_due() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::profile::ProfileFactory::new(db)
        .stripe_customer_id("cus_2")
        .build()
        .await?;
    let subscription = factory::subscription::SubscriptionFactory::new(db, admin.id)
        .customer("cus_2")
        .build()
        .await?;

    WebhookService::new(db)
        .handle_payload(
            stripe::invoice_event(
                "invoice.payment_failed",
                "in_1",
                "cus_2",
                &subscription.stripe_subscription_id,
                2900,
            )
            .as_bytes(),
        )
        .await?;

    let found = SubscriptionRepository::new(db)
        .find_by_stripe_id(&subscription.stripe_subscription_id)
        .await?
        .unwrap();
    assert_eq!(found.status, "past_due");

    Ok(())
}

/// Tests events that carry nothing actionable.
///
/// Expected: Ok for an unknown event type and for an unknown customer
#[tokio::test]
async fn acknowledges_unhandled_events() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = WebhookService::new(db);

    service
        .handle_payload(br#"{"id":"evt_x","type":"customer.created","data":{"object":{}}}"#)
        .await?;
    service
        .handle_payload(
            stripe::subscription_event(
                "customer.subscription.updated",
                "sub_9",
                "cus_unknown",
                "price_none",
                "active",
            )
            .as_bytes(),
        )
        .await?;

    assert!(SubscriptionRepository::new(db)
        .find_by_stripe_id("sub_9")
        .await?
        .is_none());

    Ok(())
}

/// Tests a body that is not an event.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_malformed_payload() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = WebhookService::new(db).handle_payload(b"not json").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
