//! `/api/ingredientes` routes.

use crate::handlers::ingrediente::{create, delete, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const INGREDIENTES_BASE: &str = "/api/ingredientes";

pub fn ingrediente_routes(state: AppState) -> Router {
    Router::new()
        .route(INGREDIENTES_BASE, get(list).post(create))
        .route(&format!("{INGREDIENTES_BASE}/"), get(list).post(create))
        .route(
            &format!("{INGREDIENTES_BASE}/:id"),
            get(read).put(update).delete(delete),
        )
        .with_state(state)
}
