use super::*;

/// Tests inserting a new group.
///
/// Expected: Ok with the group row created
#[tokio::test]
async fn inserts_new_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    repo.upsert(UpsertGroupParams {
        name: "G1".to_string(),
        description: Some("First years".to_string()),
    })
    .await?;

    let group = entity::prelude::Group::find_by_id("G1".to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(group.description.as_deref(), Some("First years"));

    Ok(())
}

/// Tests upserting a group that already exists.
///
/// Verifies that the description is replaced and no second row is created.
///
/// Expected: Ok with a single updated row
#[tokio::test]
async fn replaces_existing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::group::GroupFactory::new(db)
        .description("old")
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    repo.upsert(UpsertGroupParams {
        name: existing.name.clone(),
        description: None,
    })
    .await?;

    let groups = entity::prelude::Group::find().all(db).await?;
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name, existing.name);
    assert!(groups[0].description.is_none());

    Ok(())
}
