use super::*;

/// Tests replacing paragraphs before anyone started the module.
///
/// Expected: Ok with the new paragraph list
#[tokio::test]
async fn replaces_paragraphs_before_progress() -> Result<(), AppError> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let module = factory::reading_module::create_custom_module(db, admin.id, 3).await?;

    let detail = ReadingModuleService::new(db)
        .update(
            &profile(admin),
            UpdateReadingModuleParams {
                id: module.id,
                title: Some("Renamed".to_string()),
                paragraphs: Some(vec!["Only one.".to_string()]),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(detail.module.title, "Renamed");
    assert_eq!(detail.module.paragraph_count, 1);
    assert_eq!(detail.paragraphs.len(), 1);

    Ok(())
}

/// Tests replacing paragraphs once a student has started.
///
/// Expected: Err(AppError::BadRequest) and paragraphs unchanged
#[tokio::test]
async fn rejects_paragraph_replacement_after_progress() -> Result<(), AppError> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (admin, student) = factory::helpers::create_admin_with_student(db).await?;
    let module = factory::reading_module::create_custom_module(db, admin.id, 3).await?;
    factory::create_progress(db, student.id, module.id).await?;
    let admin = profile(admin);

    let service = ReadingModuleService::new(db);
    let result = service
        .update(
            &admin,
            UpdateReadingModuleParams {
                id: module.id,
                paragraphs: Some(vec!["Only one.".to_string()]),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.get(&admin, module.id).await?.paragraphs.len(), 3);

    Ok(())
}

/// Tests editing a curated module as a regular admin.
///
/// Expected: Err(AccessDenied) for update and delete
#[tokio::test]
async fn admin_cannot_edit_curated_module() -> Result<(), AppError> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = profile(factory::create_admin(db).await?);
    let module = factory::create_module(db, 2).await?;

    let service = ReadingModuleService::new(db);
    let update = service
        .update(
            &admin,
            UpdateReadingModuleParams {
                id: module.id,
                title: Some("Mine now".to_string()),
                ..Default::default()
            },
        )
        .await;
    let delete = service.delete(&admin, module.id).await;

    assert!(matches!(
        update,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(matches!(
        delete,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
