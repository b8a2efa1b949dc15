use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::{AppState, database, error::Result, queries::product_queries};

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Ready once the pool answers a probe; also reports how many products are stored.
pub async fn readiness_check(State(state): State<AppState>) -> Result<Json<Value>> {
    database::check_health(&state.db)
        .await
        .inspect_err(|e| tracing::warn!("Readiness probe failed: {}", e))?;

    let products = product_queries::count(&state.db).await?;

    Ok(Json(json!({
        "status": "ready",
        "database": "connected",
        "products": products,
    })))
}
