use super::*;

/// Tests activity for a student who submitted today.
///
/// Expected: Ok with one started module, current streak 1 and one active calendar day
#[tokio::test]
async fn reports_activity_for_recent_submissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_admin_with_student(db).await?;
    let module = factory::create_module(db, 3).await?;
    let student = profile(student);

    let service = ProgressService::new(db);
    service.start(&student, module.id).await?;
    service.submit(submission(student.id, module.id, 1)).await?;
    service.submit(submission(student.id, module.id, 2)).await?;

    let activity = service.activity(student.id, Some(7)).await?;

    assert_eq!(activity.modules_started, 1);
    assert_eq!(activity.modules_completed, 0);
    assert_eq!(activity.total_submissions, 2);
    assert_eq!(activity.current_streak, 1);
    assert_eq!(activity.calendar.len(), 1);
    assert_eq!(activity.calendar[0].submissions, 2);

    Ok(())
}

/// Tests the calendar window bounds.
///
/// Expected: Err(AppError::BadRequest) for 0 and 367 days
#[tokio::test]
async fn rejects_invalid_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_admin_with_student(db).await?;
    let service = ProgressService::new(db);

    assert!(matches!(
        service.activity(student.id, Some(0)).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.activity(student.id, Some(367)).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
