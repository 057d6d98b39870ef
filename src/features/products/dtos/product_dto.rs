use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::products::models::Product;

/// Response DTO for a product
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponseDto {
    pub product_id: i32,
    pub name: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub category_id: i32,
    pub description: String,
    pub color: String,
    pub stock: i32,
    pub image_url: String,
    pub featured: bool,
}

impl From<Product> for ProductResponseDto {
    fn from(p: Product) -> Self {
        Self {
            product_id: p.product_id,
            name: p.name,
            price: p.price,
            category_id: p.category_id,
            description: p.description,
            color: p.color,
            stock: p.stock,
            image_url: p.image_url,
            featured: p.featured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn response_dto_uses_camel_case_fields() {
        let dto = ProductResponseDto {
            product_id: 7,
            name: "Headphones".to_string(),
            price: Decimal::new(9999, 2),
            category_id: 1,
            description: "Over-ear".to_string(),
            color: "black".to_string(),
            stock: 12,
            image_url: "headphones.png".to_string(),
            featured: false,
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["productId"], 7);
        assert_eq!(json["categoryId"], 1);
        assert_eq!(json["imageUrl"], "headphones.png");
    }
}
