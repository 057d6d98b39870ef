use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::products::handlers;
use crate::features::products::services::ProductService;

/// Read routes for products (public, no authentication required)
pub fn routes(service: Arc<ProductService>) -> Router {
    Router::new()
        .route(
            "/categories/{category_id}/products",
            get(handlers::list_products_by_category),
        )
        .with_state(service)
}
