//! Idempotent DDL for the `croqueta` and `ingrediente` tables.
//! Order follows PostgreSQL dependencies: referenced table, referencing table, then indexes.

use sqlx::PgPool;

pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [(&'static str, &'static str)],
    pub primary_key: &'static str,
    pub unique: &'static [&'static str],
    pub foreign_keys: &'static [ForeignKeyDef],
}

pub struct ForeignKeyDef {
    pub name: &'static str,
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
    pub on_update: &'static str,
    pub on_delete: &'static str,
}

pub struct IndexDef {
    pub name: &'static str,
    pub table: &'static str,
    pub column: &'static str,
    pub method: &'static str,
}

/// `receta` is UNIQUE so that `ingrediente.receta` can reference it.
pub const CROQUETA_TABLE: TableDef = TableDef {
    name: "croqueta",
    columns: &[
        ("nombre", "VARCHAR(255) NOT NULL"),
        ("creacion", "DATE NOT NULL"),
        ("precio", "NUMERIC(10, 2) NOT NULL"),
        ("receta", "INTEGER NOT NULL"),
    ],
    primary_key: "nombre",
    unique: &["receta"],
    foreign_keys: &[],
};

pub const INGREDIENTE_TABLE: TableDef = TableDef {
    name: "ingrediente",
    columns: &[
        ("ingrediente", "VARCHAR(255) NOT NULL"),
        ("receta", "INTEGER NOT NULL"),
        ("preprocesado", "BOOLEAN NOT NULL DEFAULT FALSE"),
    ],
    primary_key: "ingrediente",
    unique: &[],
    foreign_keys: &[ForeignKeyDef {
        name: "ingrediente_receta_fkey",
        column: "receta",
        references_table: "croqueta",
        references_column: "receta",
        on_update: "NO ACTION",
        on_delete: "NO ACTION",
    }],
};

pub const INGREDIENTE_RECETA_INDEX: IndexDef = IndexDef {
    name: "ingrediente_receta_idx",
    table: "ingrediente",
    column: "receta",
    method: "btree",
};

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub fn create_table_sql(table: &TableDef) -> String {
    let mut defs: Vec<String> = table
        .columns
        .iter()
        .map(|(name, ty)| format!("{} {}", quote(name), ty))
        .collect();
    defs.push(format!("PRIMARY KEY ({})", quote(table.primary_key)));
    for col in table.unique {
        defs.push(format!("UNIQUE ({})", quote(col)));
    }
    for fk in table.foreign_keys {
        defs.push(format!(
            "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({}) ON UPDATE {} ON DELETE {}",
            quote(fk.name),
            quote(fk.column),
            quote(fk.references_table),
            quote(fk.references_column),
            fk.on_update,
            fk.on_delete
        ));
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
        quote(table.name),
        defs.join(",\n  ")
    )
}

pub fn create_index_sql(idx: &IndexDef) -> String {
    format!(
        "CREATE INDEX IF NOT EXISTS {} ON {} USING {} ({})",
        quote(idx.name),
        quote(idx.table),
        idx.method,
        quote(idx.column)
    )
}

/// Create both tables and the lookup index if they do not exist yet.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    for table in [&CROQUETA_TABLE, &INGREDIENTE_TABLE] {
        let sql = create_table_sql(table);
        tracing::debug!(sql = %sql, "ddl");
        sqlx::query(&sql).execute(pool).await?;
    }
    let sql = create_index_sql(&INGREDIENTE_RECETA_INDEX);
    tracing::debug!(sql = %sql, "ddl");
    sqlx::query(&sql).execute(pool).await?;
    Ok(())
}
