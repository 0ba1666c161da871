use super::*;

/// Tests that an admin sees curated modules and their own custom modules only.
///
/// Expected: Ok with 2 of 3 modules, each with its paragraph count
#[tokio::test]
async fn admin_sees_curated_and_own_modules() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_module_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let other_admin = factory::create_admin(db).await?;

    let curated = factory::create_module(db, 2).await?;
    let own = factory::reading_module::create_custom_module(db, admin.id, 4).await?;
    factory::reading_module::create_custom_module(db, other_admin.id, 1).await?;

    let repo = ReadingModuleRepository::new(db);
    let (modules, total) = repo
        .get_paginated(
            ModuleVisibility::CuratedAndOwnedBy(admin.id),
            ModuleFilter::default(),
            0,
            10,
        )
        .await?;

    assert_eq!(total, 2);
    let mut found: Vec<(i32, i32)> = modules.iter().map(|m| (m.id, m.paragraph_count)).collect();
    found.sort();
    assert_eq!(found, vec![(curated.id, 2), (own.id, 4)]);

    Ok(())
}

/// Tests that curated-only visibility hides every custom module.
///
/// Expected: Ok with only the curated module
#[tokio::test]
async fn curated_only_hides_custom_modules() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_module_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let curated = factory::create_module(db, 1).await?;
    factory::reading_module::create_custom_module(db, admin.id, 1).await?;

    let repo = ReadingModuleRepository::new(db);
    let (modules, total) = repo
        .get_paginated(ModuleVisibility::CuratedOnly, ModuleFilter::default(), 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(modules[0].id, curated.id);

    Ok(())
}

/// Tests level, genre and language filters.
///
/// Expected: Ok with only the module matching every filter
#[tokio::test]
async fn filters_by_metadata() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_module_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let wanted = factory::reading_module::ReadingModuleFactory::new(db)
        .level("intermediate")
        .genre("history")
        .language("fr")
        .build()
        .await?;
    factory::reading_module::ReadingModuleFactory::new(db)
        .level("intermediate")
        .genre("history")
        .language("en")
        .build()
        .await?;
    factory::reading_module::ReadingModuleFactory::new(db)
        .level("beginner")
        .genre("history")
        .language("fr")
        .build()
        .await?;

    let repo = ReadingModuleRepository::new(db);
    let (modules, total) = repo
        .get_paginated(
            ModuleVisibility::All,
            ModuleFilter {
                level: Some("intermediate".to_string()),
                genre: Some("history".to_string()),
                language: Some("fr".to_string()),
            },
            0,
            10,
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(modules[0].id, wanted.id);

    Ok(())
}
