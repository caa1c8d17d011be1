//! Per-resource services. Each is a cheap clonable handle over a shared store.

mod croqueta;
mod ingrediente;
pub use croqueta::CroquetaService;
pub use ingrediente::IngredienteService;
