use super::*;

/// Tests inserting a student with a group and two courses.
///
/// Expected: Ok with the student row and two association rows
#[tokio::test]
async fn inserts_student_with_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let first = factory::create_course(db).await?;
    let second = factory::create_course(db).await?;

    StudentRepository::new(db)
        .upsert(UpsertStudentParams {
            name: "Alice".to_string(),
            age: 20,
            group: Some(group.name.clone()),
            courses: vec![first.name, second.name],
        })
        .await?;

    let student = entity::prelude::Student::find_by_id("Alice".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(student.age, 20);
    assert_eq!(student.group_name, Some(group.name));
    assert_eq!(enrollment_count(db, "Alice").await?, 2);

    Ok(())
}

/// Tests inserting a student without group or courses.
///
/// Expected: Ok with a NULL group and no association rows
#[tokio::test]
async fn inserts_student_without_references() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StudentRepository::new(db)
        .upsert(UpsertStudentParams {
            name: "Solo".to_string(),
            age: 0,
            group: None,
            courses: Vec::new(),
        })
        .await?;

    let student = entity::prelude::Student::find_by_id("Solo".to_string())
        .one(db)
        .await?
        .unwrap();
    assert!(student.group_name.is_none());
    assert_eq!(enrollment_count(db, "Solo").await?, 0);

    Ok(())
}

/// Tests re-upserting an existing student.
///
/// Verifies that age and group are overwritten and the course set is replaced
/// rather than merged.
///
/// Expected: Ok with one student holding only the new course
#[tokio::test]
async fn replaces_existing_student_and_course_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, old_course, student) = factory::helpers::create_student_with_dependencies(db).await?;
    let new_course = factory::create_course(db).await?;

    StudentRepository::new(db)
        .upsert(UpsertStudentParams {
            name: student.name.clone(),
            age: 30,
            group: None,
            courses: vec![new_course.name.clone()],
        })
        .await?;

    assert_eq!(entity::prelude::Student::find().count(db).await?, 1);

    let updated = entity::prelude::Student::find_by_id(student.name.clone())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(updated.age, 30);
    assert!(updated.group_name.is_none());

    let enrollments = entity::prelude::StudentCourse::find()
        .filter(entity::student_course::Column::StudentName.eq(student.name.as_str()))
        .all(db)
        .await?;
    assert_eq!(enrollments.len(), 1);
    assert_eq!(enrollments[0].course_name, new_course.name);
    assert_ne!(enrollments[0].course_name, old_course.name);

    Ok(())
}

/// Tests a course set containing the same course twice.
///
/// Expected: Err with a unique constraint violation on the association
#[tokio::test]
async fn fails_on_duplicate_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;

    let result = StudentRepository::new(db)
        .upsert(UpsertStudentParams {
            name: "Dup".to_string(),
            age: 10,
            group: None,
            courses: vec![course.name.clone(), course.name],
        })
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
