use serde::{Deserialize, Serialize};

use crate::shared::constants::ROLE_ADMIN;

/// Caller identity decoded from a validated bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub sub: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// Check if user has a specific role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Check if user is an admin (required for category mutations)
    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}

/// JWT claims carried by tokens this service accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub aud: String,
    pub exp: u64,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_roles(roles: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            sub: "user-1".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn admin_role_grants_admin_access() {
        assert!(user_with_roles(&["admin"]).is_admin());
    }

    #[test]
    fn user_role_does_not_grant_admin_access() {
        assert!(!user_with_roles(&["user"]).is_admin());
        assert!(!user_with_roles(&[]).is_admin());
    }
}
