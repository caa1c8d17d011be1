//! Shared application state for all routes. Built once at startup; handlers only clone handles.

use crate::service::{CroquetaService, IngredienteService};
use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub croquetas: CroquetaService,
    pub ingredientes: IngredienteService,
}

impl AppState {
    /// Wires both services over the same store.
    pub fn new<S: Store + 'static>(store: Arc<S>) -> Self {
        Self {
            croquetas: CroquetaService::new(store.clone()),
            ingredientes: IngredienteService::new(store.clone()),
            store,
        }
    }
}
