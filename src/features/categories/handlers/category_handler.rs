use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::guards::RequireAdmin;
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, UpdateCategoryDto,
};
use crate::features::categories::services::CategoryService;
use crate::shared::types::ErrorResponse;

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponseDto>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<Vec<CategoryResponseDto>>> {
    let categories = service.list().await?;
    Ok(Json(categories))
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponseDto),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i32>,
) -> Result<Json<CategoryResponseDto>> {
    let category = service.get_by_id(id).await?;
    Ok(Json(category))
}

/// Create a category (admin only)
#[utoipa::path(
    post,
    path = "/categories",
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category created", body = CategoryResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "categories"
)]
pub async fn create_category(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CreateCategoryDto>,
) -> Result<(StatusCode, Json<CategoryResponseDto>)> {
    let category = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Update a category in place (admin only)
#[utoipa::path(
    put,
    path = "/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryDto,
    responses(
        (status = 200, description = "Category updated"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "categories"
)]
pub async fn update_category(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<UpdateCategoryDto>,
) -> Result<StatusCode> {
    service.update(id, dto).await?;
    Ok(StatusCode::OK)
}

/// Delete a category (admin only)
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Forbidden - admin only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "categories"
)]
pub async fn delete_category(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<CategoryService>>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use sqlx::postgres::PgPoolOptions;

    use crate::features::auth::model::Claims;
    use crate::features::auth::JwtValidator;
    use crate::features::categories::routes;
    use crate::features::categories::services::CategoryService;

    const SECRET: &str = "test-secret";
    const ISSUER: &str = "storefront-core";
    const AUDIENCE: &str = "storefront-api";

    // A pool that would fail on first use; rejections must happen before any
    // connection is acquired.
    fn unreachable_service() -> Arc<CategoryService> {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://unreachable:5432/none")
            .unwrap();
        Arc::new(CategoryService::new(pool))
    }

    fn test_server() -> TestServer {
        let validator = Arc::new(JwtValidator::new(
            SECRET,
            ISSUER.to_string(),
            AUDIENCE.to_string(),
            Duration::from_secs(0),
        ));
        TestServer::new(routes::routes(unreachable_service(), validator)).unwrap()
    }

    fn bearer_token(roles: &[&str]) -> String {
        let exp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
            + 3600;
        let claims = Claims {
            sub: "test-caller".to_string(),
            iss: ISSUER.to_string(),
            aud: AUDIENCE.to_string(),
            exp,
            roles: roles.iter().map(|r| r.to_string()).collect(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn mutations_without_token_are_rejected() {
        let server = test_server();

        let response = server
            .post("/categories")
            .json(&serde_json::json!({ "name": "Electronics", "description": "Gadgets" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

        let response = server.delete("/categories/1").await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn mutations_by_non_admin_are_forbidden_before_reaching_store() {
        let server = test_server();
        let token = bearer_token(&["user"]);

        let response = server
            .post("/categories")
            .authorization_bearer(&token)
            .json(&serde_json::json!({ "name": "Electronics", "description": "Gadgets" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

        let response = server
            .put("/categories/1")
            .authorization_bearer(&token)
            .json(&serde_json::json!({ "name": "Audio", "description": "Speakers" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

        let response = server
            .delete("/categories/1")
            .authorization_bearer(&token)
            .await;
        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn create_with_missing_field_is_bad_request() {
        let server = test_server();
        let token = bearer_token(&["admin"]);

        let response = server
            .post("/categories")
            .authorization_bearer(&token)
            .json(&serde_json::json!({ "name": "Electronics" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }
}
