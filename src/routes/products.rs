use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{DeleteResponse, Product, ProductRequest, ProductUpdate},
    queries::product_queries,
};

pub async fn add_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<Product>> {
    let product = product_queries::save(&state.db, &payload).await?;

    tracing::info!(id = product.id, name = %product.name, "Product saved");

    Ok(Json(product))
}

pub async fn add_products(
    State(state): State<AppState>,
    Json(payload): Json<Vec<ProductRequest>>,
) -> Result<Json<Vec<Product>>> {
    let products = product_queries::save_all(&state.db, &payload).await?;

    tracing::info!(count = products.len(), "Products saved");

    Ok(Json(products))
}

pub async fn find_all_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = product_queries::find_all(&state.db).await?;

    Ok(Json(products))
}

pub async fn find_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>> {
    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))?;

    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductUpdate>,
) -> Result<Json<Product>> {
    let product = product_queries::update(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))?;

    tracing::info!(id, "Product updated");

    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>> {
    let deleted = product_queries::delete_by_id(&state.db, id).await? > 0;

    if deleted {
        tracing::info!(id, "Product deleted");
    } else {
        tracing::debug!(id, "Delete of missing product ignored");
    }

    Ok(Json(DeleteResponse { id, deleted }))
}
