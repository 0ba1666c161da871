use super::*;

/// Tests that submissions are ordered by paragraph index, then submission time.
///
/// Expected: Ok with indexes [1, 1, 2] and the older resubmission first
#[tokio::test]
async fn orders_by_index_then_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, progress) = factory::helpers::create_progress_with_dependencies(db, 3).await?;
    let now = Utc::now();

    factory::paragraph_submission::create_submission_at(db, progress.id, 2, now).await?;
    let later = factory::paragraph_submission::create_submission_at(
        db,
        progress.id,
        1,
        now - Duration::minutes(1),
    )
    .await?;
    let earlier = factory::paragraph_submission::create_submission_at(
        db,
        progress.id,
        1,
        now - Duration::minutes(10),
    )
    .await?;

    let repo = SubmissionRepository::new(db);
    let submissions = repo.get_by_progress(progress.id).await?;

    let indexes: Vec<i32> = submissions.iter().map(|s| s.paragraph_index).collect();
    assert_eq!(indexes, vec![1, 1, 2]);
    assert_eq!(submissions[0].id, earlier.id);
    assert_eq!(submissions[1].id, later.id);

    Ok(())
}

/// Tests collecting every submission of a student across modules.
///
/// Expected: Ok with submissions from both of the student's records only
#[tokio::test]
async fn collects_submissions_for_student() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, student) = factory::helpers::create_admin_with_student(db).await?;
    let other = factory::create_student(db, admin.id).await?;
    let first = factory::create_module(db, 2).await?;
    let second = factory::create_module(db, 2).await?;

    let a = factory::create_progress(db, student.id, first.id).await?;
    let b = factory::create_progress(db, student.id, second.id).await?;
    let c = factory::create_progress(db, other.id, first.id).await?;

    let repo = SubmissionRepository::new(db);
    repo.create(a.id, 1, "one".to_string(), "one".to_string())
        .await?;
    repo.create(b.id, 1, "uno".to_string(), "uno".to_string())
        .await?;
    repo.create(c.id, 1, "eins".to_string(), "eins".to_string())
        .await?;

    let submissions = repo.get_by_student(student.id).await?;

    assert_eq!(submissions.len(), 2);
    assert!(submissions
        .iter()
        .all(|s| s.progress_id == a.id || s.progress_id == b.id));

    Ok(())
}
