use super::*;

/// Tests advancing without completing.
///
/// Expected: Ok(Some) with new highest index and still in progress
#[tokio::test]
async fn advances_without_completing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, progress) = factory::helpers::create_progress_with_dependencies(db, 3).await?;

    let repo = ProgressRepository::new(db);
    let advanced = repo
        .advance(AdvanceProgressParams {
            progress_id: progress.id,
            highest_paragraph_index_reached: 2,
            final_summary: None,
            now: Utc::now(),
        })
        .await?
        .unwrap();

    assert_eq!(advanced.highest_paragraph_index_reached, 2);
    assert!(!advanced.completed);
    assert!(advanced.final_summary.is_none());

    Ok(())
}

/// Tests advancing with a final summary completes the record.
///
/// Expected: Ok(Some) with completed, `completed_at` and final summary set
#[tokio::test]
async fn completes_with_final_summary() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, progress) = factory::helpers::create_progress_with_dependencies(db, 3).await?;
    let now = Utc::now();

    let repo = ProgressRepository::new(db);
    let completed = repo
        .advance(AdvanceProgressParams {
            progress_id: progress.id,
            highest_paragraph_index_reached: 3,
            final_summary: Some("Whole story".to_string()),
            now,
        })
        .await?
        .unwrap();

    assert!(completed.completed);
    assert!(completed.completed_at.is_some());
    assert_eq!(completed.final_summary.as_deref(), Some("Whole story"));

    Ok(())
}

/// Tests adding reading time accumulates minutes.
///
/// Expected: Ok(Some) with 25 minutes after adding 10 and 15
#[tokio::test]
async fn accumulates_time_spent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, progress) = factory::helpers::create_progress_with_dependencies(db, 1).await?;

    let repo = ProgressRepository::new(db);
    repo.add_time_spent(progress.id, 10).await?;
    let updated = repo.add_time_spent(progress.id, 15).await?.unwrap();

    assert_eq!(updated.time_spent_minutes, 25);
    assert!(repo.add_time_spent(9999, 5).await?.is_none());

    Ok(())
}

/// Tests a late, lower advance arriving after the record already moved on.
///
/// Expected: highest index stays 3, completion and final summary untouched
#[tokio::test]
async fn late_lower_advance_keeps_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, progress) = factory::helpers::create_progress_with_dependencies(db, 3).await?;

    let repo = ProgressRepository::new(db);
    let completed = repo
        .advance(AdvanceProgressParams {
            progress_id: progress.id,
            highest_paragraph_index_reached: 3,
            final_summary: Some("Whole story".to_string()),
            now: Utc::now(),
        })
        .await?
        .unwrap();

    let late = repo
        .advance(AdvanceProgressParams {
            progress_id: progress.id,
            highest_paragraph_index_reached: 1,
            final_summary: None,
            now: Utc::now(),
        })
        .await?
        .unwrap();

    assert_eq!(late.highest_paragraph_index_reached, 3);
    assert!(late.completed);
    assert_eq!(late.completed_at, completed.completed_at);
    assert_eq!(late.final_summary.as_deref(), Some("Whole story"));

    Ok(())
}

/// Tests that a lower index never lowers an in-progress record.
///
/// Expected: highest index stays 2
#[tokio::test]
async fn lower_index_does_not_regress() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, progress) = factory::helpers::create_progress_with_dependencies(db, 3).await?;

    let repo = ProgressRepository::new(db);
    for index in [2, 1] {
        repo.advance(AdvanceProgressParams {
            progress_id: progress.id,
            highest_paragraph_index_reached: index,
            final_summary: None,
            now: Utc::now(),
        })
        .await?;
    }

    let stored = repo.find_by_id(progress.id).await?.unwrap();
    assert_eq!(stored.highest_paragraph_index_reached, 2);
    assert!(!stored.completed);

    Ok(())
}

/// Tests advancing a record that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn advance_missing_record_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    let result = repo
        .advance(AdvanceProgressParams {
            progress_id: 9999,
            highest_paragraph_index_reached: 1,
            final_summary: None,
            now: Utc::now(),
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
