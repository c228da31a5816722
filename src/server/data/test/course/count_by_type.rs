use super::*;

/// Tests counting courses per type.
///
/// Expected: Ok with separate counts for MAIN and SECONDARY
#[tokio::test]
async fn counts_each_type_separately() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_course(db).await?;
    factory::create_course(db).await?;
    factory::course::CourseFactory::new(db)
        .course_type(CourseTypeEntity::Secondary)
        .build()
        .await?;

    let repo = CourseRepository::new(db);

    assert_eq!(repo.count_by_type(CourseType::Main).await?, 2);
    assert_eq!(repo.count_by_type(CourseType::Secondary).await?, 1);

    Ok(())
}

/// Tests counting on an empty table.
///
/// Expected: Ok(0) for both types
#[tokio::test]
async fn returns_zero_when_no_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourseRepository::new(db);

    assert_eq!(repo.count_by_type(CourseType::Main).await?, 0);
    assert_eq!(repo.count_by_type(CourseType::Secondary).await?, 0);

    Ok(())
}
