use super::*;

/// Tests inserting a new course.
///
/// Verifies that the type is persisted through the entity enum.
///
/// Expected: Ok with a SECONDARY course stored
#[tokio::test]
async fn inserts_new_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    CourseRepository::new(db)
        .upsert(UpsertCourseParams {
            name: "Drawing".to_string(),
            description: None,
            course_type: CourseType::Secondary,
        })
        .await?;

    let course = entity::prelude::Course::find_by_id("Drawing".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(course.course_type, CourseTypeEntity::Secondary);
    assert!(course.description.is_none());

    Ok(())
}

/// Tests upserting an existing course.
///
/// Expected: Ok with description and type replaced in place
#[tokio::test]
async fn replaces_existing_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::course::CourseFactory::new(db)
        .description("Numbers")
        .build()
        .await?;

    CourseRepository::new(db)
        .upsert(UpsertCourseParams {
            name: existing.name.clone(),
            description: Some("Advanced numbers".to_string()),
            course_type: CourseType::Secondary,
        })
        .await?;

    let courses = entity::prelude::Course::find().all(db).await?;
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].description.as_deref(), Some("Advanced numbers"));
    assert_eq!(courses[0].course_type, CourseTypeEntity::Secondary);

    Ok(())
}
