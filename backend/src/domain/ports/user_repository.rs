//! Driven port for user persistence adapters and their errors.
//!
//! The contract is intentionally narrow: five primitives, each of which either
//! completes or reports a single opaque failure. Callers confirm existence
//! with [`UserRepository::find_by_id`] before calling `update` or `delete`.

use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The record disappeared between the caller's existence check and
        /// the mutation.
        NotFound { id: UserId } => "user {id} no longer exists",
    }
}

/// Persistence primitives for user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new record, assigning it a fresh identifier.
    async fn create(&self, draft: UserDraft) -> Result<User, UserPersistenceError>;

    /// Return every stored record in identifier order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Replace the fields of an existing record.
    async fn update(&self, id: UserId, draft: UserDraft) -> Result<User, UserPersistenceError>;

    /// Remove an existing record.
    async fn delete(&self, id: UserId) -> Result<(), UserPersistenceError>;
}
