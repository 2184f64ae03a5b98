//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and live in the inbound adapter
//! layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Stable identifier assigned at creation.
    #[schema(example = 1)]
    id: u64,
    /// User name.
    #[schema(example = "Ada")]
    name: String,
    /// User biography.
    #[schema(example = "mathematician")]
    bio: String,
}

/// OpenAPI schema for [`crate::domain::UserPayload`].
///
/// Both fields are optional on the wire; requests missing either one are
/// rejected with 400.
#[derive(ToSchema)]
#[schema(as = crate::domain::UserPayload)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserPayloadSchema {
    /// User name; required and non-blank.
    #[schema(example = "Ada")]
    name: Option<String>,
    /// User biography; required and non-blank.
    #[schema(example = "mathematician")]
    bio: Option<String>,
}
