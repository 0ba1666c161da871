use super::*;

/// Tests loading students across admins.
///
/// Expected: own student Ok, other admin's student AccessDenied, unknown id NotFound
#[tokio::test]
async fn only_managing_admin_can_load_student() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, student) = factory::helpers::create_admin_with_student(db).await?;
    let other = profile(factory::create_admin(db).await?);
    let admin = profile(admin);

    let service = ProfileService::new(db);

    assert_eq!(service.get_managed_student(&admin, student.id).await?.id, student.id);
    assert!(matches!(
        service.get_managed_student(&other, student.id).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(matches!(
        service.get_managed_student(&admin, 9999).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.get_managed_student(&admin, admin.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests updating a managed student's details.
///
/// Expected: Ok with new email and names, other fields untouched
#[tokio::test]
async fn updates_managed_student() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, student) = factory::helpers::create_admin_with_student(db).await?;
    let admin = profile(admin);

    let updated = ProfileService::new(db)
        .update_student(
            &admin,
            UpdateStudentParams {
                student_id: student.id,
                email: Some("Renamed@Example.com".to_string()),
                first_name: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.email, "renamed@example.com");
    assert_eq!(updated.first_name, "Renamed");
    assert_eq!(updated.last_name, student.last_name);
    assert_eq!(updated.admin_id, Some(admin.id));

    Ok(())
}

/// Tests deleting a student managed by another admin.
///
/// Expected: Err(AccessDenied) and the student still exists
#[tokio::test]
async fn other_admin_cannot_delete_student() -> Result<(), AppError> {
    let test = TestBuilder::new().with_billing_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, student) = factory::helpers::create_admin_with_student(db).await?;
    let other = profile(factory::create_admin(db).await?);
    let admin = profile(admin);

    let service = ProfileService::new(db);
    let result = service.delete_student(&other, student.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(service.get_managed_student(&admin, student.id).await.is_ok());

    Ok(())
}
