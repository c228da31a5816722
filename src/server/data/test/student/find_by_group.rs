use super::*;

/// Tests filtering students by group.
///
/// Expected: Ok with only members of the group
#[tokio::test]
async fn returns_group_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let g1 = factory::create_group(db).await?;
    let g2 = factory::create_group(db).await?;
    let member = factory::student::StudentFactory::new(db)
        .group(&g1.name)
        .build()
        .await?;
    factory::student::StudentFactory::new(db)
        .group(&g2.name)
        .build()
        .await?;
    factory::create_student(db).await?;

    let students = StudentRepository::new(db).find_by_group(&g1.name).await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, member.name);

    Ok(())
}

/// Tests filtering by a group name that differs only in case.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn matches_group_case_sensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::group::GroupFactory::new(db).name("Blue").build().await?;
    factory::student::StudentFactory::new(db)
        .group(&group.name)
        .build()
        .await?;

    let students = StudentRepository::new(db).find_by_group("blue").await?;

    assert!(students.is_empty());

    Ok(())
}
