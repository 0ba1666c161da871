use super::*;

/// Tests creating a profile and reading it back by id and email.
///
/// Expected: Ok with matching fields from both lookups
#[tokio::test]
async fn creates_and_finds_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);
    let created = repo
        .create(CreateProfileParams {
            email: "ada@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Admin,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            admin_id: None,
        })
        .await?;

    let by_id = repo.find_by_id(created.id).await?.unwrap();
    let by_email = repo.find_by_email("ada@example.com").await?.unwrap();

    assert_eq!(by_id, created);
    assert_eq!(by_email.id, created.id);
    assert_eq!(created.role, Role::Admin);
    assert!(created.admin_id.is_none());

    Ok(())
}

/// Tests that a second profile with the same email is rejected by the database.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_admin(db).await?;

    let repo = ProfileRepository::new(db);
    let result = repo
        .create(CreateProfileParams {
            email: existing.email.clone(),
            password_hash: "hash".to_string(),
            role: Role::Admin,
            first_name: "Other".to_string(),
            last_name: "Admin".to_string(),
            admin_id: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that missing profiles return None rather than an error.
///
/// Expected: Ok(None) for id, email and customer id lookups
#[tokio::test]
async fn returns_none_for_unknown_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());
    assert!(repo.find_by_stripe_customer_id("cus_missing").await?.is_none());

    Ok(())
}

/// Tests super-admin detection.
///
/// Expected: false with only an admin, true once a super-admin exists
#[tokio::test]
async fn detects_super_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);
    factory::create_admin(db).await?;
    assert!(!repo.super_admin_exists().await?);

    factory::create_super_admin(db).await?;
    assert!(repo.super_admin_exists().await?);

    Ok(())
}
