use super::*;

/// Tests that listed students carry their group and courses.
///
/// Expected: Ok with hydrated domain models
#[tokio::test]
async fn returns_students_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, course, student) = factory::helpers::create_student_with_dependencies(db).await?;
    let loner = factory::create_student(db).await?;

    let students = StudentRepository::new(db).get_all().await?;
    assert_eq!(students.len(), 2);

    let enrolled = students.iter().find(|s| s.name == student.name).unwrap();
    assert_eq!(enrolled.group.as_ref().map(|g| g.name.as_str()), Some(group.name.as_str()));
    assert_eq!(enrolled.courses.len(), 1);
    assert_eq!(enrolled.courses[0].name, course.name);

    let alone = students.iter().find(|s| s.name == loner.name).unwrap();
    assert!(alone.group.is_none());
    assert!(alone.courses.is_empty());

    Ok(())
}
