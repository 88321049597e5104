use super::*;

/// Tests loading every servant ordered by collection number.
///
/// Verifies that servants inserted out of order come back sorted by collection number
/// with every column mapped onto the domain model.
///
/// Expected: Ok(Vec<Servant>) sorted ascending
#[tokio::test]
async fn returns_all_servants_ordered_by_collection_no() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_servant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::servant::ServantFactory::new(db)
        .collection_no(3)
        .rarity(3)
        .build()
        .await?;
    factory::servant::ServantFactory::new(db)
        .collection_no(1)
        .name("Mash Kyrielight")
        .class_name("shielder")
        .rarity(4)
        .build()
        .await?;
    factory::servant::ServantFactory::new(db)
        .collection_no(2)
        .rarity(5)
        .build()
        .await?;

    let servants = ServantRepository::new(db).get_all().await?;

    let order: Vec<i32> = servants.iter().map(|s| s.collection_no).collect();
    assert_eq!(order, vec![1, 2, 3]);
    assert_eq!(servants[0].name, "Mash Kyrielight");
    assert_eq!(servants[0].class_name, "shielder");
    assert_eq!(servants[0].rarity, 4);

    Ok(())
}

/// Tests loading from an empty table.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_servant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let servants = ServantRepository::new(db).get_all().await?;

    assert!(servants.is_empty());

    Ok(())
}

/// Tests that a missing table surfaces as a database error.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_without_servant_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ServantRepository::new(db).get_all().await;

    assert!(result.is_err());

    Ok(())
}
