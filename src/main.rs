// src/main.rs
mod routes;
mod handlers;
mod models;
mod database;
mod middleware;
mod state;
mod dtos;
mod error;
mod config;
mod seed;
#[cfg(test)]
mod test_utils;

use std::net::SocketAddr;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::AppError;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run(Config::from_env()).await {
        tracing::error!(error = %e, "Server stopped");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), AppError> {
    // Open the store, make sure the tables exist, then fill an empty catalogue
    let db_pool = database::create_pool(&config.database_url).await?;
    database::create_tables(&db_pool).await?;
    let outcome = seed::seed_initial_data(&db_pool).await?;
    tracing::debug!(?outcome, "Seeding finished");

    let app_state = state::AppState::new(db_pool);
    let cors = middleware::cors::cors_layer(&config.cors_allowed_origins);
    let app = routes::create_app(app_state, cors);

    let (listener, addr) = bind_listener(&config).await?;
    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

// Try base_port..base_port+20 to avoid crash when address is in use
async fn bind_listener(config: &Config) -> Result<(TcpListener, SocketAddr), AppError> {
    for offset in 0u16..=20 {
        let Some(port) = config.port.checked_add(offset) else {
            break;
        };
        let addr = SocketAddr::from((config.host, port));
        match TcpListener::bind(addr).await {
            Ok(listener) => return Ok((listener, addr)),
            Err(e) => {
                if offset == 0 {
                    tracing::warn!(%addr, error = %e, "Port in use, trying next");
                }
            }
        }
    }
    Err(AppError::config(format!(
        "Failed to bind to any port starting at {} on {}",
        config.port, config.host
    )))
}
