mod model;
mod server;

use std::net::SocketAddr;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::cart_abandonment, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    tracing::info!("Starting server on {}", config.listen_addr);

    // Start the abandoned-cart sweeper alongside the API server
    let sweeper_db = db.clone();
    let abandon_after_days = config.cart_abandon_after_days;
    tokio::spawn(async move {
        if let Err(e) = cart_abandonment::start_scheduler(sweeper_db, abandon_after_days).await {
            tracing::error!("Cart abandonment scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(db, config.cart_config()))
        .layer(session)
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
