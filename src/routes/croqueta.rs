//! `/api/croquetas` routes. The list path answers with and without a trailing slash.

use crate::handlers::croqueta::{create, delete, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub const CROQUETAS_BASE: &str = "/api/croquetas";

pub fn croqueta_routes(state: AppState) -> Router {
    Router::new()
        .route(CROQUETAS_BASE, get(list).post(create))
        .route(&format!("{CROQUETAS_BASE}/"), get(list).post(create))
        .route(
            &format!("{CROQUETAS_BASE}/:name"),
            get(read).put(update).delete(delete),
        )
        .with_state(state)
}
