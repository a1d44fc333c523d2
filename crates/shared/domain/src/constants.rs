//! Domain-level constants.

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_MEMBER: &str = "member";

/// Administrator role
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Ownership
// =============================================================================

/// Placeholder user that owns records created without an explicit owner.
/// Stands in for the authenticated user until authentication exists.
pub const DEFAULT_OWNER_ID: &str = "demo-user-id";

/// Email of the provisioned placeholder user
pub const DEFAULT_OWNER_EMAIL: &str = "demo@example.com";
