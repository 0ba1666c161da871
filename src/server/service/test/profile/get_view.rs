use super::*;

/// Tests that a student's view shows the managing admin's subscription.
///
/// Expected: Ok with the admin's plan name and status
#[tokio::test]
async fn student_view_uses_admin_subscription() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, student) = factory::helpers::create_admin_with_student(db).await?;
    let plan = factory::create_plan(db, "price_classroom", Some(30)).await?;
    factory::create_subscription(db, admin.id, plan.id).await?;

    let view = ProfileService::new(db).get_view(profile(student)).await?;

    let subscription = view.subscription.unwrap();
    assert_eq!(subscription.plan_name, Some(plan.name));
    assert_eq!(subscription.status, "active");
    assert_eq!(subscription.max_students, Some(30));

    Ok(())
}

/// Tests a view without any subscription.
///
/// Expected: Ok with no subscription
#[tokio::test]
async fn view_without_subscription() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let view = ProfileService::new(db).get_view(profile(admin)).await?;

    assert!(view.subscription.is_none());

    Ok(())
}
