use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::categories::models::Category;

/// Response DTO for a category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub category_id: i32,
    pub name: String,
    pub description: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            category_id: c.category_id,
            name: c.name,
            description: c.description,
        }
    }
}

/// Request body for creating a category. The identifier is assigned by the
/// store, never by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    pub name: String,
    pub description: String,
}

/// Request body for updating a category in place
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryDto {
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_dto_uses_camel_case_identifier() {
        let dto = CategoryResponseDto {
            category_id: 1,
            name: "Electronics".to_string(),
            description: "Gadgets".to_string(),
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "categoryId": 1,
                "name": "Electronics",
                "description": "Gadgets"
            })
        );
    }

    #[test]
    fn create_dto_requires_all_fields() {
        let missing_description = serde_json::json!({ "name": "Electronics" });
        assert!(serde_json::from_value::<CreateCategoryDto>(missing_description).is_err());
    }
}
