//! Ingrediente handlers. Same envelope and status mapping as the croqueta handlers.

use crate::error::AppError;
use crate::models::{IngredienteChanges, NewIngrediente};
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

fn not_found(id: &str) -> AppError {
    AppError::not_found(format!("Ingrediente no encontrado: {}", id))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state
        .ingredientes
        .get_all()
        .await
        .map_err(|e| AppError::internal("Error al recuperar ingredientes", e))?;
    Ok(success_ok(rows, "Ingredientes recuperados correctamente"))
}

pub async fn read(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    const FAILED: &str = "Error al recuperar un ingrediente";
    let Path(id) = path.map_err(|e| AppError::internal(FAILED, e))?;
    let row = state
        .ingredientes
        .get_by_key(&id)
        .await
        .map_err(|e| AppError::internal(FAILED, e))?
        .ok_or_else(|| not_found(&id))?;
    Ok(success_ok(row, "Ingrediente recuperado correctamente"))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewIngrediente>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    const FAILED: &str = "Error al crear un ingrediente";
    let Json(new) = body.map_err(|e| AppError::internal(FAILED, e))?;
    let row = state
        .ingredientes
        .create(new)
        .await
        .map_err(|e| AppError::internal(FAILED, e))?;
    tracing::info!(ingrediente = %row.ingredient_name, receta = row.recipe_id, "ingrediente created");
    Ok(success_created(row, "Ingrediente creado correctamente"))
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<IngredienteChanges>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    const FAILED: &str = "Error al editar un ingrediente";
    let Path(id) = path.map_err(|e| AppError::internal(FAILED, e))?;
    let Json(changes) = body.map_err(|e| AppError::internal(FAILED, e))?;
    state
        .ingredientes
        .update(&id, &changes)
        .await
        .map_err(|e| AppError::internal(FAILED, e))?
        .ok_or_else(|| not_found(&id))?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<StatusCode, AppError> {
    const FAILED: &str = "Error al borrar un ingrediente";
    let Path(id) = path.map_err(|e| AppError::internal(FAILED, e))?;
    let removed = state
        .ingredientes
        .delete(&id)
        .await
        .map_err(|e| AppError::internal(FAILED, e))?;
    if !removed {
        return Err(not_found(&id));
    }
    Ok(StatusCode::NO_CONTENT)
}
