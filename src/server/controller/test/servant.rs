use super::*;
use crate::model::{
    api::ErrorDto,
    servant::{ServantListDto, ServantLookupDto},
};

/// Tests listing every servant.
///
/// Expected: 200 with all servants under `servants`
#[tokio::test]
async fn lists_all_servants() {
    let (_test, app) = setup(&[5, 4, 3]).await;

    let (status, body) = get_json::<ServantListDto>(&app, "/servants").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.servants.len(), 3);
}

/// Tests that servants serialize with the catalog's field names.
#[tokio::test]
async fn serializes_catalog_field_names() {
    let (_test, app) = setup(&[4]).await;

    let (_, body) = get_json::<serde_json::Value>(&app, "/servants").await;
    let servant = &body["servants"][0];

    for field in [
        "collectionNo",
        "originalName",
        "name",
        "rarity",
        "className",
        "atkMax",
        "hpMax",
        "attribute",
        "face",
        "face_path",
    ] {
        assert!(servant.get(field).is_some(), "missing field {field}");
    }
}

/// Tests looking up a servant by collection number.
///
/// Expected: 200 with the servant under `servant`
#[tokio::test]
async fn gets_servant_by_collection_no() {
    let (test, app) = setup(&[]).await;
    let db = test.db.as_ref().unwrap();
    factory::servant::ServantFactory::new(db)
        .collection_no(2)
        .name("Altria Pendragon")
        .rarity(5)
        .build()
        .await
        .unwrap();

    let (status, body) = get_json::<ServantLookupDto>(&app, "/servants/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.servant.collection_no, 2);
    assert_eq!(body.servant.name, "Altria Pendragon");
}

/// Tests looking up a collection number that does not exist.
///
/// Expected: 404 with "Servant not found"
#[tokio::test]
async fn missing_servant_is_not_found() {
    let (_test, app) = setup(&[5]).await;

    let (status, body) = get_json::<ErrorDto>(&app, "/servants/999999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error, "Servant not found");
}

/// Tests looking up a collection number that is not an integer.
///
/// Expected: 404 with "Servant not found", like any other absent servant
#[tokio::test]
async fn non_integer_collection_no_is_not_found() {
    let (_test, app) = setup(&[5]).await;

    let (status, body) = get_json::<ErrorDto>(&app, "/servants/saber").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error, "Servant not found");
}

/// Tests looking up a collection number outside the `i32` range.
///
/// Expected: 404 with "Servant not found"
#[tokio::test]
async fn out_of_range_collection_no_is_not_found() {
    let (_test, app) = setup(&[5]).await;

    let (status, body) = get_json::<ErrorDto>(&app, "/servants/99999999999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error, "Servant not found");
}

/// Tests a lookup when the servants table is missing from the database.
///
/// Expected: 500 with the generic error body, no database detail
#[tokio::test]
async fn store_failure_is_internal_error() {
    let mut test = TestBuilder::new().build().await.unwrap();
    let db = test.database().await.unwrap().clone();
    let app = router().with_state(AppState::new(db, Catalog::default()));

    let (status, body) = get_json::<ErrorDto>(&app, "/servants/1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "Internal server error");
}
