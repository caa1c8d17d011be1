//! Server binary: loads config, prepares the store, mounts the API, serves.

use croquetas_api::{app, apply_migrations, ensure_database_exists, AppConfig, AppState, DatabaseBackend, MemoryStore, PgStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("croquetas_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let state = match config.database_backend {
        DatabaseBackend::Postgres => {
            tracing::info!("database backend: postgres");
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(&config.database_url)
                .await?;
            apply_migrations(&pool).await?;
            AppState::new(Arc::new(PgStore::new(pool)))
        }
        DatabaseBackend::Memory => {
            tracing::info!("database backend: memory");
            AppState::new(Arc::new(MemoryStore::new()))
        }
    };

    let router = app(state, &config.static_dir, config.body_limit);

    let listener = TcpListener::bind(config.address()).await?;
    tracing::info!("Servidor escuchando en {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "unable to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
