//! HTTP handlers for the croqueta and ingrediente resources.

pub mod croqueta;
pub mod ingrediente;
