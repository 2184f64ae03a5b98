//! Driving port for the users resource.
//!
//! Inbound adapters hand the raw path segment and parsed body to this port
//! and render whatever [`Outcome`] comes back. They make no decisions of
//! their own.

use async_trait::async_trait;

use crate::domain::{Outcome, UserPayload};

/// Use-case port covering create, list, fetch, replace and delete.
#[async_trait]
pub trait UsersResource: Send + Sync {
    /// Validate `payload` and store a new user.
    async fn create(&self, payload: UserPayload) -> Outcome;

    /// List every stored user.
    async fn list(&self) -> Outcome;

    /// Fetch the user addressed by the raw path segment `id`.
    async fn get(&self, id: &str) -> Outcome;

    /// Replace the user addressed by `id` with `payload`.
    async fn update(&self, id: &str, payload: UserPayload) -> Outcome;

    /// Remove the user addressed by `id`.
    async fn delete(&self, id: &str) -> Outcome;
}
