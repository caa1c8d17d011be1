//! Row types for the `croqueta` and `ingrediente` tables and their request payloads.
//! JSON uses camelCase English names; columns keep the Spanish names of the schema.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fractional digits of `croqueta.precio` (NUMERIC(10, 2)).
pub const PRICE_SCALE: u32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Croqueta {
    #[sqlx(rename = "nombre")]
    pub name: String,
    #[sqlx(rename = "creacion")]
    pub created_on: NaiveDate,
    #[sqlx(rename = "precio")]
    pub price: Decimal,
    #[sqlx(rename = "receta")]
    pub recipe_id: i32,
}

/// Body of `POST /api/croquetas`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCroqueta {
    pub name: String,
    pub created_on: NaiveDate,
    pub price: Decimal,
    pub recipe_id: i32,
}

/// Body of `PUT /api/croquetas/:name`. The key is taken from the path; a `name` here is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CroquetaChanges {
    pub created_on: Option<NaiveDate>,
    pub price: Option<Decimal>,
    pub recipe_id: Option<i32>,
}

impl CroquetaChanges {
    pub fn is_empty(&self) -> bool {
        self.created_on.is_none() && self.price.is_none() && self.recipe_id.is_none()
    }

    pub fn apply(&self, croqueta: &mut Croqueta) {
        if let Some(created_on) = self.created_on {
            croqueta.created_on = created_on;
        }
        if let Some(price) = self.price {
            croqueta.price = price;
        }
        if let Some(recipe_id) = self.recipe_id {
            croqueta.recipe_id = recipe_id;
        }
    }
}

impl From<NewCroqueta> for Croqueta {
    fn from(new: NewCroqueta) -> Self {
        Croqueta {
            name: new.name,
            created_on: new.created_on,
            price: new.price,
            recipe_id: new.recipe_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ingrediente {
    #[sqlx(rename = "ingrediente")]
    pub ingredient_name: String,
    #[sqlx(rename = "receta")]
    pub recipe_id: i32,
    #[sqlx(rename = "preprocesado")]
    pub preprocessed: bool,
}

/// Body of `POST /api/ingredientes`. `preprocessed` falls back to the column default.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIngrediente {
    pub ingredient_name: String,
    pub recipe_id: i32,
    pub preprocessed: Option<bool>,
}

/// Body of `PUT /api/ingredientes/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredienteChanges {
    pub recipe_id: Option<i32>,
    pub preprocessed: Option<bool>,
}

impl IngredienteChanges {
    pub fn is_empty(&self) -> bool {
        self.recipe_id.is_none() && self.preprocessed.is_none()
    }

    pub fn apply(&self, ingrediente: &mut Ingrediente) {
        if let Some(recipe_id) = self.recipe_id {
            ingrediente.recipe_id = recipe_id;
        }
        if let Some(preprocessed) = self.preprocessed {
            ingrediente.preprocessed = preprocessed;
        }
    }
}

impl From<NewIngrediente> for Ingrediente {
    fn from(new: NewIngrediente) -> Self {
        Ingrediente {
            ingredient_name: new.ingredient_name,
            recipe_id: new.recipe_id,
            preprocessed: new.preprocessed.unwrap_or(false),
        }
    }
}
