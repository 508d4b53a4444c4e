mod model;
mod server;

use crate::server::{
    config::Config, error::AppError, middleware::cache::ResponseCache, router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let cache = ResponseCache::new(config.cache_capacity, config.cache_ttl);
    let cors = router::cors_layer(config.cors_allowed_origin.as_deref())?;

    let app = router::router(AppState::new(db, cache)).layer(cors);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Starting server on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}
