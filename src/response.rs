//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// `{ ok, datos, mensaje }` wrapper carried by every response that has a body.
#[derive(Serialize, Debug)]
pub struct Envelope<T> {
    pub ok: bool,
    pub datos: Option<T>,
    pub mensaje: String,
}

impl<T> Envelope<T> {
    pub fn success(datos: T, mensaje: impl Into<String>) -> Self {
        Envelope {
            ok: true,
            datos: Some(datos),
            mensaje: mensaje.into(),
        }
    }
}

impl Envelope<()> {
    pub fn failure(mensaje: impl Into<String>) -> Self {
        Envelope {
            ok: false,
            datos: None,
            mensaje: mensaje.into(),
        }
    }
}

pub fn success_ok<T: Serialize>(datos: T, mensaje: &str) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::OK, Json(Envelope::success(datos, mensaje)))
}

pub fn success_created<T: Serialize>(datos: T, mensaje: &str) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::CREATED, Json(Envelope::success(datos, mensaje)))
}
