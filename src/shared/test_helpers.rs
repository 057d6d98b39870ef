#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;
#[cfg(test)]
use crate::shared::constants::{ROLE_ADMIN, ROLE_USER};

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
pub fn create_admin_user() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "test-admin".to_string(),
        roles: vec![ROLE_ADMIN.to_string()],
    }
}

#[cfg(test)]
pub fn create_regular_user() -> AuthenticatedUser {
    AuthenticatedUser {
        sub: "test-user".to_string(),
        roles: vec![ROLE_USER.to_string()],
    }
}

#[cfg(test)]
async fn inject_admin_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_admin_user());
    next.run(request).await
}

#[cfg(test)]
async fn inject_user_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_regular_user());
    next.run(request).await
}

/// Wrap a router so every request carries an admin identity, bypassing the
/// bearer-token middleware.
#[cfg(test)]
pub fn with_admin_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_admin_middleware))
}

/// Wrap a router so every request carries a non-admin identity.
#[cfg(test)]
pub fn with_user_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_user_middleware))
}
