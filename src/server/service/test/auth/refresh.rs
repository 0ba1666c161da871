use super::*;

/// Tests that a refresh rotates the token and the old one stops working.
///
/// Expected: first refresh Ok, reuse of the old token Err(InvalidRefreshToken)
#[tokio::test]
async fn refresh_rotates_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    factory::profile::ProfileFactory::new(db)
        .email("teacher@example.com")
        .password("correct horse")
        .build()
        .await?;

    let service = AuthService::new(db, &tokens);
    let session = service.login("teacher@example.com", "correct horse").await?;

    let rotated = service.refresh(&session.refresh_token).await?;
    assert_ne!(rotated.refresh_token, session.refresh_token);
    assert_eq!(rotated.profile.id, session.profile.id);

    let reused = service.refresh(&session.refresh_token).await;
    assert!(matches!(
        reused,
        Err(AppError::AuthErr(AuthError::InvalidRefreshToken))
    ));

    service.refresh(&rotated.refresh_token).await?;

    Ok(())
}

/// Tests that logout revokes the presented token and tolerates garbage.
///
/// Expected: logout Ok twice, refresh afterwards Err(InvalidRefreshToken)
#[tokio::test]
async fn logout_revokes_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    factory::profile::ProfileFactory::new(db)
        .email("teacher@example.com")
        .password("correct horse")
        .build()
        .await?;

    let service = AuthService::new(db, &tokens);
    let session = service.login("teacher@example.com", "correct horse").await?;

    service.logout(Some(&session.refresh_token)).await?;
    service.logout(Some("not-a-real-token")).await?;
    service.logout(None).await?;

    assert!(matches!(
        service.refresh(&session.refresh_token).await,
        Err(AppError::AuthErr(AuthError::InvalidRefreshToken))
    ));

    Ok(())
}
