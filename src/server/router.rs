use axum::{
    http::{
        header::{ACCEPT_ENCODING, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, ORIGIN},
        HeaderName, Method,
    },
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::{Config, ServerMode},
    controller::{
        health::{self, health},
        roll::{self, roll_multi, roll_single},
        servant::{self, get_servant, list_servants},
        stats::{self, total_servants},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Servant Gacha API",
        description = "Servant catalog and gacha roll simulation",
    ),
    paths(
        health::health,
        roll::roll_single,
        roll::roll_multi,
        servant::list_servants,
        servant::get_servant,
        stats::total_servants,
    ),
    tags(
        (name = "health", description = "Liveness"),
        (name = "roll", description = "Gacha rolls"),
        (name = "servant", description = "Servant catalog"),
        (name = "stats", description = "Catalog statistics"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/roll/single", get(roll_single))
        .route("/roll/multi", get(roll_multi))
        .route("/servants", get(list_servants))
        .route("/servants/{collection_no}", get(get_servant))
        .route("/stats/total_servants", get(total_servants))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}

/// Builds the CORS layer for the configured server mode.
///
/// Only `GET` is allowed. Release mode restricts origins to `Config::allowed_origins`,
/// debug mode accepts any origin.
pub fn cors_layer(config: &Config) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([
            ORIGIN,
            CONTENT_TYPE,
            CONTENT_LENGTH,
            ACCEPT_ENCODING,
            HeaderName::from_static("x-csrf-token"),
            AUTHORIZATION,
        ]);

    match config.server_mode {
        ServerMode::Release => cors.allow_origin(AllowOrigin::list(config.allowed_origins.clone())),
        ServerMode::Debug => cors.allow_origin(Any),
    }
}

/// Assembles the full application: routes, state, CORS and request tracing.
pub fn app(state: AppState, config: &Config) -> Router {
    router()
        .with_state(state)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}
