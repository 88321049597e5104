use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    model::catalog::Catalog, router::router, service::servant::load_catalog, state::AppState,
};

mod servant;
mod stats;

/// Builds the application over an in-memory database seeded with one servant per rarity.
///
/// The returned context owns the database and must outlive the router.
async fn setup(rarities: &[i32]) -> (TestContext, Router) {
    let test = TestBuilder::new().with_servant_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_catalog(db, rarities).await.unwrap();
    let catalog = load_catalog(db).await.unwrap();

    let app = router().with_state(AppState::new(db.clone(), catalog));

    (test, app)
}

/// Sends a GET request and returns the status with the raw body.
async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, body.to_vec())
}

/// Sends a GET request and decodes the JSON body.
async fn get_json<T: DeserializeOwned>(app: &Router, uri: &str) -> (StatusCode, T) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}
