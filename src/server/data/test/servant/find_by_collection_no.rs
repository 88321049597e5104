use super::*;

/// Tests finding an existing servant by collection number.
///
/// Expected: Ok(Some(Servant)) with matching data
#[tokio::test]
async fn finds_existing_servant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_servant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::servant::ServantFactory::new(db)
        .collection_no(2)
        .name("Altria Pendragon")
        .rarity(5)
        .build()
        .await?;
    factory::create_servant(db).await?;

    let servant = ServantRepository::new(db)
        .find_by_collection_no(2)
        .await?
        .expect("servant 2 should exist");

    assert_eq!(servant.collection_no, 2);
    assert_eq!(servant.name, "Altria Pendragon");
    assert_eq!(servant.rarity, 5);
    assert_eq!(servant.face_path, created.face_path);

    Ok(())
}

/// Tests querying for a collection number that does not exist.
///
/// Expected: Ok(None), never a default-valued servant
#[tokio::test]
async fn returns_none_for_nonexistent_servant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_servant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_servant(db).await?;

    let result = ServantRepository::new(db).find_by_collection_no(999).await?;

    assert!(result.is_none());

    Ok(())
}
