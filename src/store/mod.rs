//! Persistence seam. One trait per table; `PgStore` and `MemoryStore` implement all of them.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::{ensure_database_exists, PgStore};

use crate::error::StoreError;
use crate::models::{Croqueta, CroquetaChanges, Ingrediente, IngredienteChanges, NewCroqueta, NewIngrediente};
use async_trait::async_trait;

#[async_trait]
pub trait CroquetaStore: Send + Sync {
    /// All rows ordered by primary key.
    async fn all_croquetas(&self) -> Result<Vec<Croqueta>, StoreError>;
    async fn find_croqueta(&self, name: &str) -> Result<Option<Croqueta>, StoreError>;
    async fn insert_croqueta(&self, new: NewCroqueta) -> Result<Croqueta, StoreError>;
    /// Returns `None` when no row has this key.
    async fn update_croqueta(
        &self,
        name: &str,
        changes: &CroquetaChanges,
    ) -> Result<Option<Croqueta>, StoreError>;
    /// Returns whether a row was removed.
    async fn remove_croqueta(&self, name: &str) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait IngredienteStore: Send + Sync {
    async fn all_ingredientes(&self) -> Result<Vec<Ingrediente>, StoreError>;
    async fn find_ingrediente(&self, name: &str) -> Result<Option<Ingrediente>, StoreError>;
    async fn insert_ingrediente(&self, new: NewIngrediente) -> Result<Ingrediente, StoreError>;
    async fn update_ingrediente(
        &self,
        name: &str,
        changes: &IngredienteChanges,
    ) -> Result<Option<Ingrediente>, StoreError>;
    async fn remove_ingrediente(&self, name: &str) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait Store: CroquetaStore + IngredienteStore {
    /// Cheap round trip used by `/ready`.
    async fn ping(&self) -> Result<(), StoreError>;
}
