use super::*;

/// Tests storing a token hash and revoking it.
///
/// Expected: active before revocation, inactive with `revoked_at` set afterwards
#[tokio::test]
async fn revokes_active_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let now = Utc::now();

    let repo = RefreshTokenRepository::new(db);
    let created = repo
        .create(CreateRefreshTokenParams {
            profile_id: admin.id,
            token_hash: "abc123".to_string(),
            expires_at: now + Duration::days(30),
        })
        .await?;
    assert!(created.is_active(now));

    repo.revoke(created.id, now).await?;

    let stored = repo.find_by_hash("abc123").await?.unwrap();
    assert!(stored.revoked_at.is_some());
    assert!(!stored.is_active(now));

    Ok(())
}

/// Tests that revoking twice keeps the first revocation time.
///
/// Expected: `revoked_at` unchanged by the second call
#[tokio::test]
async fn keeps_first_revocation_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let now = Utc::now();

    let repo = RefreshTokenRepository::new(db);
    let created = repo
        .create(CreateRefreshTokenParams {
            profile_id: admin.id,
            token_hash: "def456".to_string(),
            expires_at: now + Duration::days(30),
        })
        .await?;

    repo.revoke(created.id, now).await?;
    let first = repo.find_by_hash("def456").await?.unwrap().revoked_at;

    repo.revoke(created.id, now + Duration::hours(1)).await?;
    let second = repo.find_by_hash("def456").await?.unwrap().revoked_at;

    assert_eq!(first, second);

    Ok(())
}

/// Tests that expired tokens are reported inactive.
///
/// Expected: `is_active` false past `expires_at`
#[tokio::test]
async fn expired_token_is_inactive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let now = Utc::now();

    let repo = RefreshTokenRepository::new(db);
    let created = repo
        .create(CreateRefreshTokenParams {
            profile_id: admin.id,
            token_hash: "old".to_string(),
            expires_at: now - Duration::minutes(1),
        })
        .await?;

    assert!(!created.is_active(now));
    assert!(repo.find_by_hash("unknown").await?.is_none());

    Ok(())
}
