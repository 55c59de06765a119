//! Pressrun API - AWS Lambda Runtime

use lambda_http::{run, Error};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;
use tracing::info;

use pressrun_app::{body_limit_layer, build_cors_layer, create_app};
use pressrun_common::config::Config;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .json()
        .without_time()
        .init();

    info!("Initializing Pressrun API Lambda");

    let config = Config::from_env().map_err(|e| Error::from(format!("Configuration error: {}", e)))?;

    if config.cors_allowed_origins.is_empty() {
        return Err(Error::from(
            "CORS_ALLOWED_ORIGINS environment variable is required",
        ));
    }

    let pool = PgPool::connect(&config.database_url)
        .await
        .map_err(|e| Error::from(format!("Database error: {}", e)))?;

    info!("Database connection established");

    let app = create_app(pool)
        .await
        .map_err(|e| Error::from(format!("App initialization error: {}", e)))?;

    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&config.cors_allowed_origins))
        .layer(body_limit_layer());

    info!("Pressrun API Lambda ready to serve requests");

    run(app).await
}
