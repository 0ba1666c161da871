use super::*;

/// Tests that a partial update only changes the provided fields.
///
/// Expected: Ok(Some) with new first name and unchanged last name and email
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::profile::ProfileFactory::new(db)
        .name("Grace", "Hopper")
        .build()
        .await?;

    let repo = ProfileRepository::new(db);
    let updated = repo
        .update(UpdateProfileParams {
            id: admin.id,
            first_name: Some("Amazing".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "Amazing");
    assert_eq!(updated.last_name, "Hopper");
    assert_eq!(updated.email, admin.email);

    Ok(())
}

/// Tests updating a profile that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_updating_missing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);
    let result = repo
        .update(UpdateProfileParams {
            id: 42,
            last_name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests linking a billing customer id and finding the profile through it.
///
/// Expected: Ok with the profile found by customer id
#[tokio::test]
async fn links_stripe_customer() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let repo = ProfileRepository::new(db);
    repo.set_stripe_customer_id(admin.id, "cus_linked".to_string())
        .await?
        .unwrap();

    let found = repo.find_by_stripe_customer_id("cus_linked").await?.unwrap();
    assert_eq!(found.id, admin.id);
    assert_eq!(found.stripe_customer_id.as_deref(), Some("cus_linked"));

    Ok(())
}
