//! CRUD over the `croqueta` table.

use crate::error::StoreError;
use crate::models::{Croqueta, CroquetaChanges, NewCroqueta};
use crate::store::CroquetaStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct CroquetaService {
    store: Arc<dyn CroquetaStore>,
}

impl CroquetaService {
    pub fn new(store: Arc<dyn CroquetaStore>) -> Self {
        Self { store }
    }

    /// Every croqueta; an empty table is an empty list, not an error.
    pub async fn get_all(&self) -> Result<Vec<Croqueta>, StoreError> {
        self.store.all_croquetas().await
    }

    pub async fn get_by_key(&self, name: &str) -> Result<Option<Croqueta>, StoreError> {
        self.store.find_croqueta(name).await
    }

    /// Constraint violations (duplicate name or receta) surface as `StoreError`.
    pub async fn create(&self, new: NewCroqueta) -> Result<Croqueta, StoreError> {
        self.store.insert_croqueta(new).await
    }

    /// Looks up `name` first; nothing is written when it is absent.
    pub async fn update(
        &self,
        name: &str,
        changes: &CroquetaChanges,
    ) -> Result<Option<Croqueta>, StoreError> {
        let Some(current) = self.store.find_croqueta(name).await? else {
            return Ok(None);
        };
        if changes.is_empty() {
            return Ok(Some(current));
        }
        self.store.update_croqueta(name, changes).await
    }

    pub async fn delete(&self, name: &str) -> Result<bool, StoreError> {
        if self.store.find_croqueta(name).await?.is_none() {
            return Ok(false);
        }
        self.store.remove_croqueta(name).await
    }
}
