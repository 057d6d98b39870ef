use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::models::Category;

/// Data access for the `categories` table. Each operation is one
/// parameterized statement against a pooled connection.
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories in store order
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT category_id, name, description
            FROM categories
            ORDER BY category_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Get a category by its store-assigned identifier
    pub async fn get_by_id(&self, category_id: i32) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT category_id, name, description
            FROM categories
            WHERE category_id = $1
            "#,
        )
        .bind(category_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category by id: {:?}", e);
            AppError::Database(e)
        })?;

        category
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", category_id)))
    }

    /// Insert a category and return it with the identifier the store
    /// assigned. The insert and key retrieval are one statement.
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, description)
            VALUES ($1, $2)
            RETURNING category_id, name, description
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert category: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(category.into())
    }

    /// Update a category's mutable fields in place by identifier
    pub async fn update(&self, category_id: i32, dto: UpdateCategoryDto) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE categories
            SET name = $1, description = $2
            WHERE category_id = $3
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(category_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update category: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    /// Delete a category by identifier
    pub async fn delete(&self, category_id: i32) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM categories
            WHERE category_id = $1
            "#,
        )
        .bind(category_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete category: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(())
    }
}
