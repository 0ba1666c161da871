use super::*;

fn params(profile_id: i32, plan_id: Option<i32>, status: &str) -> UpsertSubscriptionParams {
    UpsertSubscriptionParams {
        profile_id,
        stripe_subscription_id: "sub_upsert".to_string(),
        stripe_customer_id: "cus_upsert".to_string(),
        plan_id,
        status: status.to_string(),
        current_period_end: Some(Utc::now()),
        cancel_at_period_end: false,
    }
}

/// Tests that upserting the same provider id updates the existing row.
///
/// Expected: Ok with one row whose status reflects the second upsert
#[tokio::test]
async fn upsert_updates_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let plan = factory::create_plan(db, "price_basic", Some(5)).await?;

    let repo = SubscriptionRepository::new(db);
    let created = repo.upsert(params(admin.id, Some(plan.id), "incomplete")).await?;
    let updated = repo.upsert(params(admin.id, Some(plan.id), "active")).await?;

    assert_eq!(created.id, updated.id);
    assert_eq!(updated.status, "active");
    assert!(updated.is_active());

    let found = repo.find_by_stripe_id("sub_upsert").await?.unwrap();
    assert_eq!(found.status, "active");

    Ok(())
}

/// Tests loading the latest subscription together with its plan.
///
/// Expected: Ok(Some) with plan max_students 5
#[tokio::test]
async fn finds_latest_subscription_with_plan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let plan = factory::create_plan(db, "price_team", Some(5)).await?;
    factory::create_subscription(db, admin.id, plan.id).await?;

    let repo = SubscriptionRepository::new(db);
    let found = repo.find_latest_for_profile(admin.id).await?.unwrap();

    assert_eq!(found.subscription.plan_id, Some(plan.id));
    assert_eq!(found.plan.unwrap().max_students, Some(5));

    Ok(())
}

/// Tests setting the status by provider id.
///
/// Expected: true for a known subscription, false for an unknown one
#[tokio::test]
async fn sets_status_by_provider_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let subscription = factory::subscription::SubscriptionFactory::new(db, admin.id)
        .build()
        .await?;

    let repo = SubscriptionRepository::new(db);
    assert!(
        repo.set_status(&subscription.stripe_subscription_id, STATUS_PAST_DUE)
            .await?
    );
    assert!(!repo.set_status("sub_missing", STATUS_PAST_DUE).await?);

    let found = repo
        .find_by_stripe_id(&subscription.stripe_subscription_id)
        .await?
        .unwrap();
    assert_eq!(found.status, STATUS_PAST_DUE);
    assert!(!found.is_active());

    Ok(())
}
