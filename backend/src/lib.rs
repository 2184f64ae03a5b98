//! Users API: a small REST resource over user records.
//!
//! The domain resolver turns each request into exactly one
//! [`domain::Outcome`]; the HTTP adapter renders it, and storage sits behind
//! the [`domain::ports::UserRepository`] port.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::{Trace, TraceId};
