use super::*;

/// Tests that an admin passes the admin permission check.
///
/// Expected: Ok(Profile) with the admin's id and role
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let admin = factory::create_admin(db).await?;
    let headers = headers_for(&tokens, &admin);

    let profile = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(profile.id, admin.id);
    assert_eq!(profile.role, Role::Admin);

    Ok(())
}

/// Tests that a super-admin satisfies the admin permission.
///
/// Expected: Ok(Profile)
#[tokio::test]
async fn super_admin_passes_admin_permission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let super_admin = factory::create_super_admin(db).await?;
    let headers = headers_for(&tokens, &super_admin);

    let profile = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin, Permission::SuperAdmin])
        .await?;

    assert_eq!(profile.role, Role::SuperAdmin);

    Ok(())
}

/// Tests that a student is denied admin endpoints.
///
/// Expected: Err(AuthError::AccessDenied) naming the student
#[tokio::test]
async fn denies_student_admin_permission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let admin = factory::create_admin(db).await?;
    let student = factory::create_student(db, admin.id).await?;
    let headers = headers_for(&tokens, &student);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) => assert_eq!(id, student.id),
        other => panic!("Expected AccessDenied, got: {:?}", other.map(|p| p.id)),
    }

    Ok(())
}

/// Tests that an admin is denied student-only endpoints.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_student_permission() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let admin = factory::create_admin(db).await?;
    let headers = headers_for(&tokens, &admin);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Student])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that a request without a bearer token is rejected.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn denies_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests that a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn denies_token_with_wrong_signature() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let admin = factory::create_admin(db).await?;
    let forged = TokenService::new("some-other-secret", 15, 30);
    let headers = headers_for(&forged, &admin);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests that a token for a deleted profile is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_token_for_missing_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let ghost = test_utils::fixture::profile_entity_builder().id(4242).build();
    let headers = headers_for(&tokens, &ghost);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) => assert_eq!(id, 4242),
        other => panic!("Expected UserNotInDatabase, got: {:?}", other.map(|p| p.id)),
    }

    Ok(())
}
