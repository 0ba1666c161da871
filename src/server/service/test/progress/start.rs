use super::*;

/// Tests that starting a module twice returns the same record.
///
/// Expected: Ok with identical ids and highest index unchanged by the second start
#[tokio::test]
async fn start_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_admin_with_student(db).await?;
    let module = factory::create_module(db, 3).await?;
    let student = profile(student);

    let service = ProgressService::new(db);
    let first = service.start(&student, module.id).await?;
    service.submit(submission(student.id, module.id, 2)).await?;
    let second = service.start(&student, module.id).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.highest_paragraph_index_reached, 2);
    assert_eq!(service.list(student.id).await?.len(), 1);

    Ok(())
}

/// Tests starting another admin's custom module.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn start_rejects_invisible_module() -> Result<(), AppError> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_admin_with_student(db).await?;
    let other_admin = factory::create_admin(db).await?;
    let module = factory::reading_module::create_custom_module(db, other_admin.id, 2).await?;

    let result = ProgressService::new(db)
        .start(&profile(student), module.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests starting the managing admin's custom module.
///
/// Expected: Ok with a fresh record
#[tokio::test]
async fn start_allows_own_admins_custom_module() -> Result<(), AppError> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, student) = factory::helpers::create_admin_with_student(db).await?;
    let module = factory::reading_module::create_custom_module(db, admin.id, 2).await?;

    let progress = ProgressService::new(db)
        .start(&profile(student), module.id)
        .await?;

    assert_eq!(progress.module_id, module.id);
    assert_eq!(progress.highest_paragraph_index_reached, 0);

    Ok(())
}
