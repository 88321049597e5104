mod model;
mod server;

use crate::server::{
    config::Config, error::AppError, router, service::servant::load_catalog, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);
    tracing::info!("Starting server in {:?} mode", config.server_mode);

    let db = startup::connect_to_database(&config).await?;
    let catalog = load_catalog(&db).await?;

    let app = router::app(AppState::new(db, catalog), &config);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);
    tracing::info!("API docs available at /api/docs");

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
