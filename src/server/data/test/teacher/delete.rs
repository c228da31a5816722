use super::*;

/// Tests deleting a teacher with course associations.
///
/// Expected: Ok with teacher and association rows removed
#[tokio::test]
async fn deletes_teacher_and_cascades_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let course = factory::create_course(db).await?;
    let teacher = factory::teacher::TeacherFactory::new(db)
        .course(&course.name)
        .build()
        .await?;

    let repo = TeacherRepository::new(db);
    repo.delete(&teacher.name).await?;

    assert!(!repo.exists(&teacher.name).await?);
    assert_eq!(entity::prelude::TeacherCourse::find().count(db).await?, 0);

    Ok(())
}
