use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::ProductResponseDto;
use crate::features::products::models::Product;

/// Data access for the `products` table. Only the lookup-by-category read
/// path is exposed through the API.
pub struct ProductService {
    pool: PgPool,
}

impl ProductService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all products belonging to a category. Returns an empty list for
    /// categories with no products.
    pub async fn list_by_category(&self, category_id: i32) -> Result<Vec<ProductResponseDto>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT product_id, name, price, category_id, description, color, stock, image_url, featured
            FROM products
            WHERE category_id = $1
            ORDER BY product_id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list products by category: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(products.into_iter().map(|p| p.into()).collect())
    }
}
