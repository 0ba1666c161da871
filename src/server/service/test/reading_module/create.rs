use super::*;

/// Tests an admin creating a custom module.
///
/// Expected: Ok with trimmed paragraphs, no description and the admin as creator
#[tokio::test]
async fn admin_creates_custom_module() -> Result<(), AppError> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = profile(factory::create_admin(db).await?);

    let detail = ReadingModuleService::new(db)
        .create(&admin, module_params(Some(admin.id)))
        .await?;

    assert!(detail.module.is_custom);
    assert_eq!(detail.module.created_by, Some(admin.id));
    assert_eq!(detail.module.paragraph_count, 2);
    assert!(detail.module.description.is_none());
    assert_eq!(detail.paragraphs[0].content, "First.");

    Ok(())
}

/// Tests who may create curated modules.
///
/// Expected: admin Err(AccessDenied), super-admin Ok
#[tokio::test]
async fn only_super_admin_creates_curated_modules() -> Result<(), AppError> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = profile(factory::create_admin(db).await?);
    let super_admin = profile(factory::create_super_admin(db).await?);

    let service = ReadingModuleService::new(db);
    let denied = service.create(&admin, module_params(None)).await;
    let curated = service.create(&super_admin, module_params(None)).await?;

    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(!curated.module.is_custom);

    Ok(())
}

/// Tests module validation.
///
/// Expected: Err(AppError::BadRequest) for no paragraphs and for a blank paragraph
#[tokio::test]
async fn rejects_invalid_paragraphs() -> Result<(), AppError> {
    let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = profile(factory::create_admin(db).await?);
    let service = ReadingModuleService::new(db);

    let empty = service
        .create(
            &admin,
            CreateReadingModuleParams {
                paragraphs: Vec::new(),
                ..module_params(Some(admin.id))
            },
        )
        .await;
    let blank = service
        .create(
            &admin,
            CreateReadingModuleParams {
                paragraphs: vec!["Fine.".to_string(), " ".to_string()],
                ..module_params(Some(admin.id))
            },
        )
        .await;

    assert!(matches!(empty, Err(AppError::BadRequest(_))));
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    Ok(())
}
