//! CRUD over the `ingrediente` table. Same contract as `CroquetaService`, keyed by ingredient name.

use crate::error::StoreError;
use crate::models::{Ingrediente, IngredienteChanges, NewIngrediente};
use crate::store::IngredienteStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct IngredienteService {
    store: Arc<dyn IngredienteStore>,
}

impl IngredienteService {
    pub fn new(store: Arc<dyn IngredienteStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<Ingrediente>, StoreError> {
        self.store.all_ingredientes().await
    }

    pub async fn get_by_key(&self, name: &str) -> Result<Option<Ingrediente>, StoreError> {
        self.store.find_ingrediente(name).await
    }

    /// An unknown `recipe_id` fails on the foreign key.
    pub async fn create(&self, new: NewIngrediente) -> Result<Ingrediente, StoreError> {
        self.store.insert_ingrediente(new).await
    }

    /// The row is located by the path key, never by anything in the body.
    pub async fn update(
        &self,
        name: &str,
        changes: &IngredienteChanges,
    ) -> Result<Option<Ingrediente>, StoreError> {
        let Some(current) = self.store.find_ingrediente(name).await? else {
            return Ok(None);
        };
        if changes.is_empty() {
            return Ok(Some(current));
        }
        self.store.update_ingrediente(name, changes).await
    }

    pub async fn delete(&self, name: &str) -> Result<bool, StoreError> {
        if self.store.find_ingrediente(name).await?.is_none() {
            return Ok(false);
        }
        self.store.remove_ingrediente(name).await
    }
}
