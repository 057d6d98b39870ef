use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::products::dtos::ProductResponseDto;
use crate::features::products::services::ProductService;

/// List products belonging to a category
#[utoipa::path(
    get,
    path = "/categories/{categoryId}/products",
    params(
        ("categoryId" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Products in the category (empty list if none)", body = Vec<ProductResponseDto>),
    ),
    tag = "products"
)]
pub async fn list_products_by_category(
    State(service): State<Arc<ProductService>>,
    Path(category_id): Path<i32>,
) -> Result<Json<Vec<ProductResponseDto>>> {
    let products = service.list_by_category(category_id).await?;
    Ok(Json(products))
}
