use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::server::{service::servant::ServantService, state::AppState};

pub static STATS_TAG: &str = "stats";

/// Responds with the bare servant count, not wrapped in an object.
#[utoipa::path(
    get,
    path = "/stats/total_servants",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Number of servants in the catalog", body = usize)
    ),
)]
pub async fn total_servants(State(state): State<AppState>) -> impl IntoResponse {
    let total = ServantService::new(&state.db, &state.catalog).total();

    (StatusCode::OK, Json(total))
}
