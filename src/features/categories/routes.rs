use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::core::middleware::auth_middleware;
use crate::features::auth::JwtValidator;
use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature.
///
/// Reads are public. Mutations sit behind the bearer-token middleware; the
/// `RequireAdmin` guard in each mutation handler enforces the role. The
/// middleware is attached per method so it never runs for the public reads
/// sharing the same paths.
pub fn routes(service: Arc<CategoryService>, jwt_validator: Arc<JwtValidator>) -> Router {
    let auth = from_fn_with_state(jwt_validator, auth_middleware);

    Router::new()
        .route(
            "/categories",
            post(handlers::create_category)
                .route_layer(auth.clone())
                .get(handlers::list_categories),
        )
        .route(
            "/categories/{id}",
            put(handlers::update_category)
                .delete(handlers::delete_category)
                .route_layer(auth)
                .get(handlers::get_category),
        )
        .with_state(service)
}
