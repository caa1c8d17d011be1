//! Typed errors and HTTP mapping.

use crate::response::Envelope;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
    #[error("DATABASE_BACKEND must be one of: postgres, memory (got '{0}')")]
    UnknownBackend(String),
    #[error("invalid DATABASE_URL: {0}")]
    DatabaseUrl(String),
}

/// Faults raised by a store. None of these reach the client; they all render as 500.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("duplicate key: {0}")]
    Duplicate(String),
    #[error("foreign key violation: {0}")]
    ForeignKey(String),
    #[error("row still referenced: {0}")]
    Referenced(String),
}

/// Cause attached to a 500 response. Logged, never serialized.
#[derive(Error, Debug)]
pub enum Cause {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("request body: {0}")]
    Body(#[from] JsonRejection),
    #[error("request path: {0}")]
    Path(#[from] PathRejection),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}: {source}")]
    Internal { message: &'static str, source: Cause },
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound {
            message: message.into(),
        }
    }

    /// Wraps a failure under the operation's public message.
    pub fn internal(message: &'static str, source: impl Into<Cause>) -> Self {
        AppError::Internal {
            message,
            source: source.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::NotFound { message } => message,
            AppError::Internal { message, source } => {
                tracing::error!(error = %source, "{}", message);
                message.to_string()
            }
        };
        (status, Json(Envelope::failure(message))).into_response()
    }
}
