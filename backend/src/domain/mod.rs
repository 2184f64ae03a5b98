//! Domain primitives, ports and services.
//!
//! Purpose: define the user record, payload validation and the outcome
//! resolver independently of HTTP and storage. Inbound adapters depend on
//! [`ports::UsersResource`]; outbound adapters implement
//! [`ports::UserRepository`].

pub mod outcome;
pub mod ports;
pub mod user;
mod user_resolver;

pub use self::outcome::Outcome;
pub use self::user::{User, UserDraft, UserId, UserPayload, UserValidationError};
pub use self::user_resolver::UserResolver;
