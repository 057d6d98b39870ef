use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::time::Duration;

use super::model::{AuthenticatedUser, Claims};
use crate::core::error::AppError;

/// Validates bearer tokens issued with the service's shared HS256 secret.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    issuer: String,
    audience: String,
    leeway: u64,
}

impl JwtValidator {
    pub fn new(secret: &str, issuer: String, audience: String, leeway: Duration) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
            audience,
            leeway: leeway.as_secs(),
        }
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = self.leeway;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Unauthorized(e.to_string()))?;

        let claims = token_data.claims;

        Ok(AuthenticatedUser {
            sub: claims.sub,
            roles: claims.roles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use std::time::{SystemTime, UNIX_EPOCH};

    const SECRET: &str = "test-secret";
    const ISSUER: &str = "storefront-core";
    const AUDIENCE: &str = "storefront-api";

    fn now_secs() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    fn make_token(secret: &str, iss: &str, aud: &str, exp: u64, roles: Vec<String>) -> String {
        let claims = Claims {
            sub: "user-1".to_string(),
            iss: iss.to_string(),
            aud: aud.to_string(),
            exp,
            roles,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn validator() -> JwtValidator {
        JwtValidator::new(
            SECRET,
            ISSUER.to_string(),
            AUDIENCE.to_string(),
            Duration::from_secs(0),
        )
    }

    #[test]
    fn valid_token_yields_user_with_roles() {
        let token = make_token(
            SECRET,
            ISSUER,
            AUDIENCE,
            now_secs() + 3600,
            vec!["admin".to_string()],
        );

        let user = validator().validate_token(&token).unwrap();
        assert_eq!(user.sub, "user-1");
        assert!(user.is_admin());
    }

    #[test]
    fn wrong_signature_is_rejected() {
        let token = make_token("other-secret", ISSUER, AUDIENCE, now_secs() + 3600, vec![]);
        assert!(validator().validate_token(&token).is_err());
    }

    #[test]
    fn wrong_audience_is_rejected() {
        let token = make_token(SECRET, ISSUER, "some-other-api", now_secs() + 3600, vec![]);
        assert!(validator().validate_token(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = make_token(SECRET, ISSUER, AUDIENCE, now_secs() - 3600, vec![]);
        assert!(validator().validate_token(&token).is_err());
    }
}
