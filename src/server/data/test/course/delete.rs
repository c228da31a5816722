use super::*;

/// Tests deleting a course nobody is enrolled in.
///
/// Expected: Ok with the course removed
#[tokio::test]
async fn deletes_unreferenced_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;

    let repo = CourseRepository::new(db);
    repo.delete(&course.name).await?;

    assert!(!repo.exists(&course.name).await?);

    Ok(())
}

/// Tests deleting a course a student is enrolled in.
///
/// Expected: Err with a foreign key violation and the course kept
#[tokio::test]
async fn fails_when_student_enrolled() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course, _) = factory::helpers::create_student_with_dependencies(db).await?;

    let repo = CourseRepository::new(db);
    let result = repo.delete(&course.name).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert!(repo.exists(&course.name).await?);

    Ok(())
}

/// Tests deleting a course a teacher teaches.
///
/// Expected: Err with a foreign key violation
#[tokio::test]
async fn fails_when_teacher_enrolled() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    factory::teacher::TeacherFactory::new(db)
        .course(&course.name)
        .build()
        .await?;

    let result = CourseRepository::new(db).delete(&course.name).await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    Ok(())
}
