use super::*;

/// Tests that review fields are written exactly as given.
///
/// Expected: Ok(Some) with score, feedback and completion cleared
#[tokio::test]
async fn saves_review_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, student) = factory::helpers::create_admin_with_student(db).await?;
    let module = factory::create_module(db, 2).await?;
    let progress = factory::student_progress::StudentProgressFactory::new(db, student.id, module.id)
        .completed(2, "Done")
        .build()
        .await?;
    let now = Utc::now();

    let repo = ProgressRepository::new(db);
    let reviewed = repo
        .save_review(ReviewProgressParams {
            progress_id: progress.id,
            score: Some(88),
            teacher_feedback: Some("Nice work".to_string()),
            teacher_feedback_at: Some(now),
            completed: false,
            completed_at: None,
        })
        .await?
        .unwrap();

    assert_eq!(reviewed.score, Some(88));
    assert_eq!(reviewed.teacher_feedback.as_deref(), Some("Nice work"));
    assert!(reviewed.teacher_feedback_at.is_some());
    assert!(!reviewed.completed);
    assert!(reviewed.completed_at.is_none());
    assert_eq!(reviewed.final_summary.as_deref(), Some("Done"));

    Ok(())
}
