//! REST backend for croquetas and the ingredientes that make them up.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, DatabaseBackend};
pub use error::{AppError, ConfigError, StoreError};
pub use migration::apply_migrations;
pub use response::{success_created, success_ok, Envelope};
pub use routes::{app, common_routes, croqueta_routes, ingrediente_routes};
pub use service::{CroquetaService, IngredienteService};
pub use state::AppState;
pub use store::{ensure_database_exists, MemoryStore, PgStore, Store};
