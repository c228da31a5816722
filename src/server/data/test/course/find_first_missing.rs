use super::*;

/// Tests lookup when every course exists.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_all_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_course(db).await?;
    let second = factory::create_course(db).await?;

    let missing = CourseRepository::new(db)
        .find_first_missing(&[first.name, second.name])
        .await?;

    assert!(missing.is_none());

    Ok(())
}

/// Tests lookup with an empty name list.
///
/// Expected: Ok(None) without touching the table
#[tokio::test]
async fn returns_none_for_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let missing = CourseRepository::new(db).find_first_missing(&[]).await?;

    assert!(missing.is_none());

    Ok(())
}

/// Tests that the first unknown name in input order is reported.
///
/// Expected: Ok(Some("Unknown A")) even though "Unknown B" is also missing
#[tokio::test]
async fn returns_first_missing_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let known = factory::create_course(db).await?;

    let missing = CourseRepository::new(db)
        .find_first_missing(&[
            known.name,
            "Unknown A".to_string(),
            "Unknown B".to_string(),
        ])
        .await?;

    assert_eq!(missing.as_deref(), Some("Unknown A"));

    Ok(())
}

/// Tests that names are matched case-sensitively.
///
/// Expected: Ok(Some) for a name differing only in case
#[tokio::test]
async fn matches_names_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::course::CourseFactory::new(db)
        .name("Math")
        .build()
        .await?;

    let missing = CourseRepository::new(db)
        .find_first_missing(&["math".to_string()])
        .await?;

    assert_eq!(missing.as_deref(), Some("math"));

    Ok(())
}
