use super::*;

/// Tests that listed teachers carry their group and courses.
///
/// Expected: Ok with hydrated domain models
#[tokio::test]
async fn returns_teachers_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let course = factory::create_course(db).await?;
    let teacher = factory::teacher::TeacherFactory::new(db)
        .group(&group.name)
        .course(&course.name)
        .build()
        .await?;

    let teachers = TeacherRepository::new(db).get_all().await?;

    assert_eq!(teachers.len(), 1);
    assert_eq!(teachers[0].name, teacher.name);
    assert_eq!(teachers[0].age, teacher.age);
    assert_eq!(teachers[0].group.as_ref().unwrap().name, group.name);
    assert_eq!(teachers[0].courses[0].name, course.name);

    Ok(())
}
