//! Tagged result of resolving one request against the users resource.
//!
//! Every resolver operation yields exactly one [`Outcome`]. Inbound adapters
//! own the mapping from outcome to protocol status and body.

use crate::domain::User;

/// Client-facing messages attached to failure outcomes.
pub mod messages {
    /// Create payload lacked `name` or `bio`.
    pub const CREATE_INVALID: &str = "Please provide name and bio for the user.";
    /// Persistence rejected a create.
    pub const CREATE_FAILED: &str = "There was an error while saving the user to the database";
    /// Persistence failed to list users.
    pub const LIST_FAILED: &str = "The users information could not be retrieved.";
    /// No record exists for the addressed id.
    pub const NOT_FOUND: &str = "The user with the specified ID does not exist.";
    /// Persistence failed to fetch a single user.
    pub const FETCH_FAILED: &str = "The user information could not be retrieved.";
    /// Update payload lacked `name` or `bio`.
    pub const UPDATE_INVALID: &str = "Please provide a name and bio for the user.";
    /// Persistence failed during an update.
    pub const UPDATE_FAILED: &str = "The user information could not be modified.";
    /// Persistence failed during a delete.
    pub const DELETE_FAILED: &str = "The user could not be removed.";
}

/// Result of one users-resource operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A record was created.
    Created(User),
    /// A single record was fetched or replaced.
    Ok(User),
    /// All records, possibly none.
    OkList(Vec<User>),
    /// The addressed record was removed.
    NoContent,
    /// The payload lacked a required field.
    ValidationFailed(String),
    /// The addressed record does not exist.
    NotFound(String),
    /// The persistence collaborator failed.
    StorageFailed(String),
}

impl Outcome {
    /// [`Outcome::ValidationFailed`] with the given message.
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::ValidationFailed(message.into())
    }

    /// [`Outcome::NotFound`] with the standard message.
    #[must_use]
    pub fn not_found() -> Self {
        Self::NotFound(messages::NOT_FOUND.to_owned())
    }

    /// [`Outcome::StorageFailed`] with the given message.
    pub fn storage_failed(message: impl Into<String>) -> Self {
        Self::StorageFailed(message.into())
    }
}
