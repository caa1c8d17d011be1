//! In-process store. Mirrors the constraints of the PostgreSQL schema: primary keys,
//! UNIQUE `croqueta.receta`, and the `ingrediente.receta` foreign key with NO ACTION.

use super::{CroquetaStore, IngredienteStore, Store};
use crate::error::StoreError;
use crate::models::{
    Croqueta, CroquetaChanges, Ingrediente, IngredienteChanges, NewCroqueta, NewIngrediente, PRICE_SCALE,
};
use async_trait::async_trait;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    croquetas: BTreeMap<String, Croqueta>,
    ingredientes: BTreeMap<String, Ingrediente>,
}

impl Tables {
    fn receta_taken(&self, recipe_id: i32, except: &str) -> bool {
        self.croquetas
            .values()
            .any(|c| c.recipe_id == recipe_id && c.name != except)
    }

    fn receta_exists(&self, recipe_id: i32) -> bool {
        self.croquetas.values().any(|c| c.recipe_id == recipe_id)
    }

    fn receta_referenced(&self, recipe_id: i32) -> bool {
        self.ingredientes.values().any(|i| i.recipe_id == recipe_id)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// NUMERIC(10, 2) semantics: round half away from zero to two places and always carry two.
fn to_column_scale(price: Decimal) -> Decimal {
    let mut p = price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    p.rescale(PRICE_SCALE);
    p
}

#[async_trait]
impl CroquetaStore for MemoryStore {
    async fn all_croquetas(&self) -> Result<Vec<Croqueta>, StoreError> {
        Ok(self.tables.read().await.croquetas.values().cloned().collect())
    }

    async fn find_croqueta(&self, name: &str) -> Result<Option<Croqueta>, StoreError> {
        Ok(self.tables.read().await.croquetas.get(name).cloned())
    }

    async fn insert_croqueta(&self, new: NewCroqueta) -> Result<Croqueta, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.croquetas.contains_key(&new.name) {
            return Err(StoreError::Duplicate(format!("croqueta.nombre = {}", new.name)));
        }
        if tables.receta_taken(new.recipe_id, &new.name) {
            return Err(StoreError::Duplicate(format!("croqueta.receta = {}", new.recipe_id)));
        }
        let mut row = Croqueta::from(new);
        row.price = to_column_scale(row.price);
        tables.croquetas.insert(row.name.clone(), row.clone());
        Ok(row)
    }

    async fn update_croqueta(
        &self,
        name: &str,
        changes: &CroquetaChanges,
    ) -> Result<Option<Croqueta>, StoreError> {
        let mut tables = self.tables.write().await;
        let Some(current) = tables.croquetas.get(name).cloned() else {
            return Ok(None);
        };
        let mut updated = current.clone();
        changes.apply(&mut updated);
        updated.price = to_column_scale(updated.price);
        if updated.recipe_id != current.recipe_id {
            if tables.receta_taken(updated.recipe_id, name) {
                return Err(StoreError::Duplicate(format!("croqueta.receta = {}", updated.recipe_id)));
            }
            if tables.receta_referenced(current.recipe_id) {
                return Err(StoreError::Referenced(format!("croqueta.receta = {}", current.recipe_id)));
            }
        }
        tables.croquetas.insert(name.to_string(), updated.clone());
        Ok(Some(updated))
    }

    async fn remove_croqueta(&self, name: &str) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let Some(current) = tables.croquetas.get(name) else {
            return Ok(false);
        };
        if tables.receta_referenced(current.recipe_id) {
            return Err(StoreError::Referenced(format!("croqueta.receta = {}", current.recipe_id)));
        }
        tables.croquetas.remove(name);
        Ok(true)
    }
}

#[async_trait]
impl IngredienteStore for MemoryStore {
    async fn all_ingredientes(&self) -> Result<Vec<Ingrediente>, StoreError> {
        Ok(self.tables.read().await.ingredientes.values().cloned().collect())
    }

    async fn find_ingrediente(&self, name: &str) -> Result<Option<Ingrediente>, StoreError> {
        Ok(self.tables.read().await.ingredientes.get(name).cloned())
    }

    async fn insert_ingrediente(&self, new: NewIngrediente) -> Result<Ingrediente, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.ingredientes.contains_key(&new.ingredient_name) {
            return Err(StoreError::Duplicate(format!(
                "ingrediente.ingrediente = {}",
                new.ingredient_name
            )));
        }
        if !tables.receta_exists(new.recipe_id) {
            return Err(StoreError::ForeignKey(format!("ingrediente.receta = {}", new.recipe_id)));
        }
        let row = Ingrediente::from(new);
        tables.ingredientes.insert(row.ingredient_name.clone(), row.clone());
        Ok(row)
    }

    async fn update_ingrediente(
        &self,
        name: &str,
        changes: &IngredienteChanges,
    ) -> Result<Option<Ingrediente>, StoreError> {
        let mut tables = self.tables.write().await;
        let Some(current) = tables.ingredientes.get(name).cloned() else {
            return Ok(None);
        };
        let mut updated = current;
        changes.apply(&mut updated);
        if !tables.receta_exists(updated.recipe_id) {
            return Err(StoreError::ForeignKey(format!("ingrediente.receta = {}", updated.recipe_id)));
        }
        tables.ingredientes.insert(name.to_string(), updated.clone());
        Ok(Some(updated))
    }

    async fn remove_ingrediente(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.tables.write().await.ingredientes.remove(name).is_some())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
