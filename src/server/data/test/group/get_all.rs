use super::*;

/// Tests listing groups.
///
/// Expected: Ok with every group returned
#[tokio::test]
async fn returns_all_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_group(db).await?;
    let second = factory::create_group(db).await?;

    let groups = GroupRepository::new(db).get_all().await?;

    assert_eq!(groups.len(), 2);
    assert!(groups.iter().any(|g| g.name == first.name));
    assert!(groups.iter().any(|g| g.name == second.name));

    Ok(())
}

/// Tests listing groups on an empty table.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_when_no_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_school_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let groups = GroupRepository::new(db).get_all().await?;

    assert!(groups.is_empty());

    Ok(())
}
