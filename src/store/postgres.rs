//! PostgreSQL store over a shared `PgPool`.

use super::{CroquetaStore, IngredienteStore, Store};
use crate::error::StoreError;
use crate::models::{Croqueta, CroquetaChanges, Ingrediente, IngredienteChanges, NewCroqueta, NewIngrediente};
use async_trait::async_trait;
use sqlx::{ConnectOptions, PgPool, Postgres, QueryBuilder};
use std::str::FromStr;

const CROQUETA_COLUMNS: &str = "nombre, creacion, precio, receta";
const INGREDIENTE_COLUMNS: &str = "ingrediente, receta, preprocesado";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CroquetaStore for PgStore {
    async fn all_croquetas(&self) -> Result<Vec<Croqueta>, StoreError> {
        let sql = format!("SELECT {} FROM croqueta ORDER BY nombre", CROQUETA_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Croqueta>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_croqueta(&self, name: &str) -> Result<Option<Croqueta>, StoreError> {
        let sql = format!("SELECT {} FROM croqueta WHERE nombre = $1", CROQUETA_COLUMNS);
        tracing::debug!(sql = %sql, name = %name, "query");
        let row = sqlx::query_as::<_, Croqueta>(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_croqueta(&self, new: NewCroqueta) -> Result<Croqueta, StoreError> {
        let sql = croqueta_insert_sql();
        tracing::debug!(sql = %sql, name = %new.name, "query");
        let row = sqlx::query_as::<_, Croqueta>(&sql)
            .bind(new.name)
            .bind(new.created_on)
            .bind(new.price)
            .bind(new.recipe_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_croqueta(
        &self,
        name: &str,
        changes: &CroquetaChanges,
    ) -> Result<Option<Croqueta>, StoreError> {
        if changes.is_empty() {
            return self.find_croqueta(name).await;
        }
        let mut builder = croqueta_update(name, changes);
        tracing::debug!(sql = %builder.sql(), name = %name, "query");
        let row = builder
            .build_query_as::<Croqueta>()
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn remove_croqueta(&self, name: &str) -> Result<bool, StoreError> {
        tracing::debug!(name = %name, "delete croqueta");
        let result = sqlx::query("DELETE FROM croqueta WHERE nombre = $1")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl IngredienteStore for PgStore {
    async fn all_ingredientes(&self) -> Result<Vec<Ingrediente>, StoreError> {
        let sql = format!("SELECT {} FROM ingrediente ORDER BY ingrediente", INGREDIENTE_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Ingrediente>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_ingrediente(&self, name: &str) -> Result<Option<Ingrediente>, StoreError> {
        let sql = format!("SELECT {} FROM ingrediente WHERE ingrediente = $1", INGREDIENTE_COLUMNS);
        tracing::debug!(sql = %sql, name = %name, "query");
        let row = sqlx::query_as::<_, Ingrediente>(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_ingrediente(&self, new: NewIngrediente) -> Result<Ingrediente, StoreError> {
        let sql = ingrediente_insert_sql();
        tracing::debug!(sql = %sql, name = %new.ingredient_name, "query");
        let row = sqlx::query_as::<_, Ingrediente>(&sql)
            .bind(new.ingredient_name)
            .bind(new.recipe_id)
            .bind(new.preprocessed)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_ingrediente(
        &self,
        name: &str,
        changes: &IngredienteChanges,
    ) -> Result<Option<Ingrediente>, StoreError> {
        if changes.is_empty() {
            return self.find_ingrediente(name).await;
        }
        let mut builder = ingrediente_update(name, changes);
        tracing::debug!(sql = %builder.sql(), name = %name, "query");
        let row = builder
            .build_query_as::<Ingrediente>()
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn remove_ingrediente(&self, name: &str) -> Result<bool, StoreError> {
        tracing::debug!(name = %name, "delete ingrediente");
        let result = sqlx::query("DELETE FROM ingrediente WHERE ingrediente = $1")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

fn croqueta_insert_sql() -> String {
    format!(
        "INSERT INTO croqueta ({cols}) VALUES ($1, $2, $3, $4) RETURNING {cols}",
        cols = CROQUETA_COLUMNS
    )
}

/// Missing `preprocessed` takes the column default.
fn ingrediente_insert_sql() -> String {
    format!(
        "INSERT INTO ingrediente ({cols}) VALUES ($1, $2, COALESCE($3, FALSE)) RETURNING {cols}",
        cols = INGREDIENTE_COLUMNS
    )
}

/// `UPDATE croqueta SET <supplied columns> WHERE nombre = .. RETURNING ..`. Callers skip empty changes.
fn croqueta_update<'a>(name: &'a str, changes: &CroquetaChanges) -> QueryBuilder<'a, Postgres> {
    let mut builder = QueryBuilder::<Postgres>::new("UPDATE croqueta SET ");
    {
        let mut set = builder.separated(", ");
        if let Some(created_on) = changes.created_on {
            set.push("creacion = ").push_bind_unseparated(created_on);
        }
        if let Some(price) = changes.price {
            set.push("precio = ").push_bind_unseparated(price);
        }
        if let Some(recipe_id) = changes.recipe_id {
            set.push("receta = ").push_bind_unseparated(recipe_id);
        }
    }
    builder
        .push(" WHERE nombre = ")
        .push_bind(name)
        .push(" RETURNING ")
        .push(CROQUETA_COLUMNS);
    builder
}

fn ingrediente_update<'a>(name: &'a str, changes: &IngredienteChanges) -> QueryBuilder<'a, Postgres> {
    let mut builder = QueryBuilder::<Postgres>::new("UPDATE ingrediente SET ");
    {
        let mut set = builder.separated(", ");
        if let Some(recipe_id) = changes.recipe_id {
            set.push("receta = ").push_bind_unseparated(recipe_id);
        }
        if let Some(preprocessed) = changes.preprocessed {
            set.push("preprocesado = ").push_bind_unseparated(preprocessed);
        }
    }
    builder
        .push(" WHERE ingrediente = ")
        .push_bind(name)
        .push(" RETURNING ")
        .push(INGREDIENTE_COLUMNS);
    builder
}

/// Connects to the `postgres` maintenance database and creates the target database if missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let Some((admin_url, db_name)) = split_db_name(database_url) else {
        return Ok(());
    };
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Splits `postgres://host/db?opts` into (`postgres://host/postgres?opts`, `db`).
fn split_db_name(url: &str) -> Option<(String, String)> {
    let scheme_end = url.find("://")? + 3;
    let path_start = scheme_end + url[scheme_end..].find('/')? + 1;
    let rest = &url[path_start..];
    let (db_name, query) = match rest.split_once('?') {
        Some((db, q)) => (db, Some(q)),
        None => (rest, None),
    };
    let mut admin_url = format!("{}postgres", &url[..path_start]);
    if let Some(q) = query {
        admin_url.push('?');
        admin_url.push_str(q);
    }
    Some((admin_url, db_name.trim().to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
