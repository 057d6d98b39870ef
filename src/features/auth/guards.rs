//! Role-based authorization guards.
//!
//! Guards extract the authenticated user placed in request extensions by the
//! auth middleware and verify the required role before the handler body runs.

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard for checking if the caller is an admin.
///
/// Only allows users carrying the "admin" role. All category mutations
/// require this guard.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(user): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }

        Ok(RequireAdmin(user.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use axum_test::TestServer;

    use crate::shared::test_helpers::{with_admin_auth, with_user_auth};

    async fn guarded(RequireAdmin(_user): RequireAdmin) -> StatusCode {
        StatusCode::OK
    }

    fn guarded_router() -> Router {
        Router::new().route("/guarded", get(guarded))
    }

    #[tokio::test]
    async fn rejects_unauthenticated_request() {
        let server = TestServer::new(guarded_router()).unwrap();
        let response = server.get("/guarded").await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn rejects_non_admin_user() {
        let server = TestServer::new(with_user_auth(guarded_router())).unwrap();
        let response = server.get("/guarded").await;
        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn allows_admin_user() {
        let server = TestServer::new(with_admin_auth(guarded_router())).unwrap();
        let response = server.get("/guarded").await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }
}
