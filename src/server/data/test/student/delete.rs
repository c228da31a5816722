use super::*;

/// Tests deleting a student enrolled in a course.
///
/// Verifies that the association rows are removed with the student and the
/// course itself is kept.
///
/// Expected: Ok with student and enrollments gone
#[tokio::test]
async fn deletes_student_and_cascades_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, course, student) = factory::helpers::create_student_with_dependencies(db).await?;

    let repo = StudentRepository::new(db);
    repo.delete(&student.name).await?;

    assert!(!repo.exists(&student.name).await?);
    assert_eq!(enrollment_count(db, &student.name).await?, 0);
    assert!(entity::prelude::Course::find_by_id(course.name)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests the existence check.
///
/// Expected: true for a stored student, false otherwise
#[tokio::test]
async fn exists_reports_presence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);

    assert!(repo.exists(&student.name).await?);
    assert!(!repo.exists("Nobody").await?);

    Ok(())
}
