use super::*;

/// Tests that only the admin's own students are listed, sorted by name.
///
/// Expected: Ok with two students in last-name order and total 2
#[tokio::test]
async fn lists_only_own_students() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let other_admin = factory::create_admin(db).await?;

    factory::profile::ProfileFactory::new(db)
        .student_of(admin.id)
        .name("Zoe", "Young")
        .build()
        .await?;
    factory::profile::ProfileFactory::new(db)
        .student_of(admin.id)
        .name("Abe", "Adams")
        .build()
        .await?;
    factory::create_student(db, other_admin.id).await?;

    let repo = ProfileRepository::new(db);
    let (students, total) = repo.get_students_paginated(admin.id, 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(students.len(), 2);
    assert_eq!(students[0].last_name, "Adams");
    assert_eq!(students[1].last_name, "Young");
    assert!(students.iter().all(|s| s.admin_id == Some(admin.id)));
    assert_eq!(repo.count_students(admin.id).await?, 2);

    Ok(())
}

/// Tests paging through students.
///
/// Expected: Ok with 2 + 1 students across two pages of size 2
#[tokio::test]
async fn paginates_students() -> Result<(), AppError> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    for _ in 0..3 {
        factory::create_student(db, admin.id).await?;
    }

    let repo = ProfileRepository::new(db);
    let (first, total) = repo.get_students_paginated(admin.id, 0, 2).await?;
    let (second, _) = repo.get_students_paginated(admin.id, 1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);

    Ok(())
}
