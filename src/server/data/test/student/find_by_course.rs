use super::*;

/// Tests filtering students by course.
///
/// Expected: Ok with only the enrolled students
#[tokio::test]
async fn returns_enrolled_students() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let math = factory::create_course(db).await?;
    let art = factory::create_course(db).await?;
    let enrolled = factory::student::StudentFactory::new(db)
        .course(&math.name)
        .course(&art.name)
        .build()
        .await?;
    factory::student::StudentFactory::new(db)
        .course(&art.name)
        .build()
        .await?;

    let students = StudentRepository::new(db).find_by_course(&math.name).await?;

    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, enrolled.name);
    // The full course set is returned, not just the matched course
    assert_eq!(students[0].courses.len(), 2);

    Ok(())
}

/// Tests filtering by a course that does not exist.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_unknown_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_student_with_dependencies(db).await?;

    let students = StudentRepository::new(db).find_by_course("Nope").await?;

    assert!(students.is_empty());

    Ok(())
}
