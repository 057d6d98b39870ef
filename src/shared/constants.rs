// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Admin role - required for all category mutations
pub const ROLE_ADMIN: &str = "admin";

/// User role - regular shopper, read-only access
#[allow(dead_code)]
pub const ROLE_USER: &str = "user";
