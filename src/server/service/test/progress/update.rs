use super::*;

/// Tests an admin scoring and commenting on own student's record.
///
/// Expected: Ok with score, feedback and feedback timestamp set
#[tokio::test]
async fn admin_reviews_own_student() -> Result<(), AppError> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, _, _, progress) = factory::helpers::create_progress_with_dependencies(db, 2).await?;

    let updated = ProgressService::new(db)
        .update(
            &profile(admin),
            UpdateProgressParams {
                progress_id: progress.id,
                score: Some(75),
                teacher_feedback: Some("  Good start  ".to_string()),
                completed: None,
            },
        )
        .await?;

    assert_eq!(updated.score, Some(75));
    assert_eq!(updated.teacher_feedback.as_deref(), Some("Good start"));
    assert!(updated.teacher_feedback_at.is_some());
    assert!(!updated.completed);

    Ok(())
}

/// Tests an admin reviewing another admin's student.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn other_admin_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, progress) = factory::helpers::create_progress_with_dependencies(db, 2).await?;
    let intruder = factory::create_admin(db).await?;

    let result = ProgressService::new(db)
        .update(
            &profile(intruder),
            UpdateProgressParams {
                progress_id: progress.id,
                score: Some(10),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests review validation.
///
/// Expected: Err(BadRequest) for score 101 and for completing an unfinished module,
/// Err(NotFound) for an unknown record
#[tokio::test]
async fn rejects_invalid_reviews() -> Result<(), AppError> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, _, _, progress) = factory::helpers::create_progress_with_dependencies(db, 2).await?;
    let admin = profile(admin);
    let service = ProgressService::new(db);

    let score = service
        .update(
            &admin,
            UpdateProgressParams {
                progress_id: progress.id,
                score: Some(101),
                ..Default::default()
            },
        )
        .await;
    let premature = service
        .update(
            &admin,
            UpdateProgressParams {
                progress_id: progress.id,
                completed: Some(true),
                ..Default::default()
            },
        )
        .await;
    let missing = service
        .update(
            &admin,
            UpdateProgressParams {
                progress_id: 9999,
                score: Some(50),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(score, Err(AppError::BadRequest(_))));
    assert!(matches!(premature, Err(AppError::BadRequest(_))));
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests reopening a completed record and completing it again.
///
/// Expected: reopening clears `completed_at`; completing sets it again
#[tokio::test]
async fn reopens_and_recompletes_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, student) = factory::helpers::create_admin_with_student(db).await?;
    let module = factory::create_module(db, 2).await?;
    let progress = factory::student_progress::StudentProgressFactory::new(db, student.id, module.id)
        .completed(2, "All of it")
        .build()
        .await?;
    let admin = profile(admin);
    let service = ProgressService::new(db);

    let reopened = service
        .update(
            &admin,
            UpdateProgressParams {
                progress_id: progress.id,
                completed: Some(false),
                ..Default::default()
            },
        )
        .await?;
    assert!(!reopened.completed);
    assert!(reopened.completed_at.is_none());

    let completed = service
        .update(
            &admin,
            UpdateProgressParams {
                progress_id: progress.id,
                completed: Some(true),
                ..Default::default()
            },
        )
        .await?;
    assert!(completed.completed);
    assert!(completed.completed_at.is_some());
    assert_eq!(completed.final_summary.as_deref(), Some("All of it"));

    Ok(())
}
