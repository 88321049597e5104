use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        servant::{ServantListDto, ServantLookupDto},
    },
    server::{
        error::AppError, service::servant::ServantService, state::AppState,
        util::parse::parse_collection_no,
    },
};

pub static SERVANT_TAG: &str = "servant";

#[utoipa::path(
    get,
    path = "/servants",
    tag = SERVANT_TAG,
    responses(
        (status = 200, description = "Every servant in the catalog", body = ServantListDto)
    ),
)]
pub async fn list_servants(State(state): State<AppState>) -> impl IntoResponse {
    let servants = ServantService::new(&state.db, &state.catalog).list();

    (
        StatusCode::OK,
        Json(ServantListDto {
            servants: servants.into_iter().map(|s| s.into_dto()).collect(),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/servants/{collection_no}",
    tag = SERVANT_TAG,
    params(
        ("collection_no" = i32, Path, description = "Servant collection number")
    ),
    responses(
        (status = 200, description = "Servant with the given collection number", body = ServantLookupDto),
        (status = 404, description = "Servant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_servant(
    State(state): State<AppState>,
    Path(collection_no): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let collection_no = parse_collection_no(&collection_no)?;

    let servant = ServantService::new(&state.db, &state.catalog)
        .get_by_collection_no(collection_no)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ServantLookupDto {
            servant: servant.into_dto(),
        }),
    ))
}
