use super::*;

/// Tests what each role sees.
///
/// Expected: admin sees curated plus own, student sees curated plus admin's,
/// super-admin sees everything
#[tokio::test]
async fn visibility_follows_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, student) = factory::helpers::create_admin_with_student(db).await?;
    let other = factory::create_admin(db).await?;
    let super_admin = factory::create_super_admin(db).await?;

    factory::create_module(db, 1).await?;
    factory::reading_module::create_custom_module(db, admin.id, 1).await?;
    let foreign = factory::reading_module::create_custom_module(db, other.id, 1).await?;

    let service = ReadingModuleService::new(db);
    let for_admin = service
        .list(&profile(admin), ModuleFilter::default(), 0, 10)
        .await?;
    let student = profile(student);
    let for_student = service
        .list(&student, ModuleFilter::default(), 0, 10)
        .await?;
    let for_super_admin = service
        .list(&profile(super_admin), ModuleFilter::default(), 0, 10)
        .await?;

    assert_eq!(for_admin.total, 2);
    assert_eq!(for_student.total, 2);
    assert_eq!(for_super_admin.total, 3);
    assert!(matches!(
        service.get(&student, foreign.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
