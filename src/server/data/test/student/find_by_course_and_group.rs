use super::*;

/// Tests filtering students by both course and group.
///
/// Expected: Ok with only students matching both
#[tokio::test]
async fn requires_both_course_and_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let other_group = factory::create_group(db).await?;
    let course = factory::create_course(db).await?;

    let both = factory::student::StudentFactory::new(db)
        .group(&group.name)
        .course(&course.name)
        .build()
        .await?;
    factory::student::StudentFactory::new(db)
        .group(&other_group.name)
        .course(&course.name)
        .build()
        .await?;
    factory::student::StudentFactory::new(db)
        .group(&group.name)
        .build()
        .await?;

    let students = StudentRepository::new(db)
        .find_by_course_and_group(&course.name, &group.name)
        .await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, both.name);

    Ok(())
}
