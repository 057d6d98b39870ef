use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error envelope returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(message: String) -> Self {
        Self {
            success: false,
            message,
            errors: None,
        }
    }
}
