use super::*;

/// Tests the age threshold of the course report.
///
/// Verifies that the comparison is strict and that students outside the course
/// are ignored regardless of age.
///
/// Expected: Ok with only students strictly older than the threshold
#[tokio::test]
async fn returns_students_strictly_older() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    factory::student::StudentFactory::new(db)
        .name("Bob")
        .age(15)
        .course(&course.name)
        .build()
        .await?;
    factory::student::StudentFactory::new(db)
        .name("Carol")
        .age(17)
        .course(&course.name)
        .build()
        .await?;
    factory::student::StudentFactory::new(db)
        .name("Dave")
        .age(16)
        .course(&course.name)
        .build()
        .await?;
    factory::student::StudentFactory::new(db)
        .name("Eve")
        .age(40)
        .build()
        .await?;

    let students = StudentRepository::new(db)
        .find_by_course_older_than(&course.name, 16)
        .await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "Carol");

    Ok(())
}
