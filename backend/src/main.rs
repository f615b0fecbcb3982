//! Main entry point for the authentication backend.
//!
//! Initializes logging, loads configuration from the environment, connects
//! the database pool (running migrations), and serves the router.

use backend::config::Config;
use backend::database::Database;
use backend::utils::jwt::JwtUtils;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    let db = Database::new(&config).await?;
    let jwt_utils = Arc::new(JwtUtils::from_config(&config));

    let app = backend::app(db.pool().clone(), jwt_utils);

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("Starting auth server on port {}", config.server_port);
    axum::serve(listener, app).await?;

    Ok(())
}
