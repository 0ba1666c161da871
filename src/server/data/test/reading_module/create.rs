use super::*;

/// Tests creating a module with paragraphs indexed in the given order.
///
/// Expected: Ok with paragraphs 1..=3 and matching content
#[tokio::test]
async fn creates_module_with_ordered_paragraphs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_module_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let repo = ReadingModuleRepository::new(db);
    let detail = repo
        .create(CreateReadingModuleParams {
            title: "The Fox".to_string(),
            description: Some("A short story".to_string()),
            level: "beginner".to_string(),
            genre: "fable".to_string(),
            language: "en".to_string(),
            created_by: Some(admin.id),
            paragraphs: vec![
                "First.".to_string(),
                "Second.".to_string(),
                "Third.".to_string(),
            ],
        })
        .await?;

    assert!(detail.module.is_custom);
    assert_eq!(detail.module.created_by, Some(admin.id));
    assert_eq!(detail.module.paragraph_count, 3);

    let indexes: Vec<i32> = detail.paragraphs.iter().map(|p| p.paragraph_index).collect();
    assert_eq!(indexes, vec![1, 2, 3]);
    assert_eq!(detail.paragraphs[1].content, "Second.");

    let reloaded = repo.get_detail(detail.module.id).await?.unwrap();
    assert_eq!(reloaded.paragraphs, detail.paragraphs);
    assert_eq!(repo.paragraph_count(detail.module.id).await?, 3);

    Ok(())
}

/// Tests that a module without a creator is stored as curated.
///
/// Expected: Ok with `is_custom` false
#[tokio::test]
async fn creates_curated_module() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_module_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReadingModuleRepository::new(db);
    let detail = repo
        .create(CreateReadingModuleParams {
            title: "Curated".to_string(),
            description: None,
            level: "advanced".to_string(),
            genre: "science".to_string(),
            language: "en".to_string(),
            created_by: None,
            paragraphs: vec!["Only paragraph.".to_string()],
        })
        .await?;

    assert!(!detail.module.is_custom);
    assert!(detail.module.created_by.is_none());

    Ok(())
}
