mod health;
mod products;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route(
            "/products",
            get(products::find_all_products).post(products::add_product),
        )
        .route("/products/bulk", post(products::add_products))
        .route("/products/{id}", get(products::find_product_by_id))
        .route("/products/update/{id}", put(products::update_product))
        .route("/products/delete/{id}", delete(products::delete_product))
}
