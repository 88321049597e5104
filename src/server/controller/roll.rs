use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        roll::{MultiRollDto, SingleRollDto},
    },
    server::{error::AppError, service::roll::RollService, state::AppState},
};

pub static ROLL_TAG: &str = "roll";

/// Draws one servant using a fresh thread-local generator.
#[utoipa::path(
    get,
    path = "/roll/single",
    tag = ROLL_TAG,
    responses(
        (status = 200, description = "Servant drawn by a single roll", body = SingleRollDto),
        (status = 500, description = "Rolled band has no servants", body = ErrorDto)
    ),
)]
pub async fn roll_single(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let servant = RollService::new(&state.catalog).single(&mut rand::rng())?;

    Ok((
        StatusCode::OK,
        Json(SingleRollDto {
            roll: servant.into_dto(),
        }),
    ))
}

/// Draws eleven servants using a fresh thread-local generator.
#[utoipa::path(
    get,
    path = "/roll/multi",
    tag = ROLL_TAG,
    responses(
        (status = 200, description = "Eleven servants, the first guaranteed 4★ or above", body = MultiRollDto),
        (status = 500, description = "Guaranteed pool or a rolled band has no servants", body = ErrorDto)
    ),
)]
pub async fn roll_multi(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rolls = RollService::new(&state.catalog).multi(&mut rand::rng())?;

    Ok((
        StatusCode::OK,
        Json(MultiRollDto {
            rolls: rolls.into_iter().map(|servant| servant.into_dto()).collect(),
        }),
    ))
}
