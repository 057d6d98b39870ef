use sqlx::FromRow;

/// Database model for a category row
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub category_id: i32,
    pub name: String,
    pub description: String,
}
