use serde::{Deserialize, Serialize};

/// A row of `PRODUCT_TBL`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

/// Body of `POST /products`. Without an id the store assigns one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

/// Body of `PUT /products/update/{id}`. Overwrites every mutable column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub id: i64,
    pub deleted: bool,
}
