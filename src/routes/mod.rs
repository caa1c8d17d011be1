//! Route table and the assembled application router.

mod common;
mod croqueta;
mod ingrediente;

pub use common::common_routes;
pub use croqueta::{croqueta_routes, CROQUETAS_BASE};
pub use ingrediente::{ingrediente_routes, INGREDIENTES_BASE};

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Default cap on request bodies.
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Full application: both resources under `/api`, health routes, and static files as fallback.
/// Oversized bodies fail inside the JSON extractor, so they still get the operation's envelope.
pub fn app(state: AppState, static_dir: impl AsRef<Path>, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(croqueta_routes(state.clone()))
        .merge(ingrediente_routes(state))
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
}
