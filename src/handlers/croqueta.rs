//! Croqueta handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::models::{CroquetaChanges, NewCroqueta};
use crate::response::{success_created, success_ok};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

fn not_found(name: &str) -> AppError {
    AppError::not_found(format!("Croqueta no encontrada: {}", name))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .croquetas
        .get_all()
        .await
        .map_err(|e| AppError::internal("Error al recuperar croquetas", e))?;
    Ok(success_ok(rows, "Croquetas recuperadas correctamente"))
}

pub async fn read(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    const FAILED: &str = "Error al recuperar una croqueta";
    let Path(name) = path.map_err(|e| AppError::internal(FAILED, e))?;
    let row = state
        .croquetas
        .get_by_key(&name)
        .await
        .map_err(|e| AppError::internal(FAILED, e))?
        .ok_or_else(|| not_found(&name))?;
    Ok(success_ok(row, "Croqueta recuperada correctamente"))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewCroqueta>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    const FAILED: &str = "Error al crear una croqueta";
    let Json(new) = body.map_err(|e| AppError::internal(FAILED, e))?;
    let row = state
        .croquetas
        .create(new)
        .await
        .map_err(|e| AppError::internal(FAILED, e))?;
    tracing::info!(name = %row.name, "croqueta created");
    Ok(success_created(row, "Croqueta creada correctamente"))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<CroquetaChanges>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    const FAILED: &str = "Error al editar una croqueta";
    let Path(name) = path.map_err(|e| AppError::internal(FAILED, e))?;
    let Json(changes) = body.map_err(|e| AppError::internal(FAILED, e))?;
    state
        .croquetas
        .update(&name, &changes)
        .await
        .map_err(|e| AppError::internal(FAILED, e))?
        .ok_or_else(|| not_found(&name))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, AppError> {
    const FAILED: &str = "Error al borrar una croqueta";
    let Path(name) = path.map_err(|e| AppError::internal(FAILED, e))?;
    let removed = state
        .croquetas
        .delete(&name)
        .await
        .map_err(|e| AppError::internal(FAILED, e))?;
    if !removed {
        return Err(not_found(&name));
    }
    tracing::info!(name = %name, "croqueta deleted");
    Ok(StatusCode::NO_CONTENT)
}
