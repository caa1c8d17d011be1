//! Operational routes: liveness, readiness against the store, build info.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
struct Readiness {
    status: &'static str,
    database: &'static str,
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(Readiness {
                status: "ok",
                database: "ok",
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "store did not answer readiness ping");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Readiness {
                    status: "degraded",
                    database: "unavailable",
                }),
            )
        }
    }
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { Json(json!({ "status": "ok" })) }))
        .route("/ready", get(ready))
        .route(
            "/version",
            get(|| async {
                Json::<Value>(json!({
                    "name": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                }))
            }),
        )
        .with_state(state)
}
