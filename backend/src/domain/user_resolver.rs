//! Outcome resolution for the users resource.
//!
//! [`UserResolver`] implements [`UsersResource`] on top of a
//! [`UserRepository`]. Precedence rules:
//!
//! - `create` validates the payload before storage is touched.
//! - `get`, `update` and `delete` resolve existence first; `update` only
//!   validates the payload once the record is known to exist.
//! - Repository failures surface as [`Outcome::StorageFailed`] with the
//!   operation's message and are never retried here.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::domain::outcome::messages;
use crate::domain::ports::{UserPersistenceError, UserRepository, UsersResource};
use crate::domain::{Outcome, User, UserId, UserPayload};

/// Users resource service resolving each request to one [`Outcome`].
#[derive(Clone)]
pub struct UserResolver<R> {
    repository: Arc<R>,
}

impl<R> UserResolver<R> {
    /// Create a resolver over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

/// Result of checking that an addressed record exists.
enum Lookup {
    Found(User),
    Missing,
    Failed(UserPersistenceError),
}

impl<R> UserResolver<R>
where
    R: UserRepository,
{
    async fn lookup(&self, raw_id: &str) -> Lookup {
        // A segment that is not a canonical id cannot name a stored record.
        let Ok(id) = raw_id.parse::<UserId>() else {
            return Lookup::Missing;
        };
        match self.repository.find_by_id(id).await {
            Ok(Some(user)) => Lookup::Found(user),
            Ok(None) => Lookup::Missing,
            Err(err) => Lookup::Failed(err),
        }
    }

    fn not_found(raw_id: &str) -> Outcome {
        warn!(user_id = raw_id, "user not found");
        Outcome::not_found()
    }

    fn storage_failed(operation: &str, err: &UserPersistenceError, message: &str) -> Outcome {
        error!(operation, kind = err.kind(), error = %err, "user repository failed");
        Outcome::storage_failed(message)
    }

    /// Fold a mutation error into an outcome. A record deleted by a concurrent
    /// request after the existence check resolves as not found.
    fn mutation_failed(
        operation: &str,
        raw_id: &str,
        err: &UserPersistenceError,
        message: &str,
    ) -> Outcome {
        match err {
            UserPersistenceError::NotFound { .. } => Self::not_found(raw_id),
            UserPersistenceError::Connection { .. } | UserPersistenceError::Query { .. } => {
                Self::storage_failed(operation, err, message)
            }
        }
    }
}

#[async_trait]
impl<R> UsersResource for UserResolver<R>
where
    R: UserRepository,
{
    async fn create(&self, payload: UserPayload) -> Outcome {
        let draft = match payload.into_draft() {
            Ok(draft) => draft,
            Err(reason) => {
                debug!(%reason, "rejected create payload");
                return Outcome::validation_failed(messages::CREATE_INVALID);
            }
        };

        match self.repository.create(draft).await {
            Ok(user) => {
                debug!(user_id = %user.id(), "user created");
                Outcome::Created(user)
            }
            Err(err) => Self::storage_failed("create", &err, messages::CREATE_FAILED),
        }
    }

    async fn list(&self) -> Outcome {
        match self.repository.list().await {
            Ok(users) => {
                debug!(count = users.len(), "users listed");
                Outcome::OkList(users)
            }
            Err(err) => Self::storage_failed("list", &err, messages::LIST_FAILED),
        }
    }

    async fn get(&self, id: &str) -> Outcome {
        match self.lookup(id).await {
            Lookup::Found(user) => {
                debug!(user_id = id, "user fetched");
                Outcome::Ok(user)
            }
            Lookup::Missing => Self::not_found(id),
            Lookup::Failed(err) => Self::storage_failed("get", &err, messages::FETCH_FAILED),
        }
    }

    async fn update(&self, id: &str, payload: UserPayload) -> Outcome {
        let existing = match self.lookup(id).await {
            Lookup::Found(user) => user,
            Lookup::Missing => return Self::not_found(id),
            Lookup::Failed(err) => {
                return Self::storage_failed("update", &err, messages::UPDATE_FAILED);
            }
        };

        let draft = match payload.into_draft() {
            Ok(draft) => draft,
            Err(reason) => {
                debug!(user_id = id, %reason, "rejected update payload");
                return Outcome::validation_failed(messages::UPDATE_INVALID);
            }
        };

        match self.repository.update(existing.id(), draft).await {
            Ok(user) => {
                debug!(user_id = %user.id(), "user updated");
                Outcome::Ok(user)
            }
            Err(err) => Self::mutation_failed("update", id, &err, messages::UPDATE_FAILED),
        }
    }

    async fn delete(&self, id: &str) -> Outcome {
        let existing = match self.lookup(id).await {
            Lookup::Found(user) => user,
            Lookup::Missing => return Self::not_found(id),
            Lookup::Failed(err) => {
                return Self::storage_failed("delete", &err, messages::DELETE_FAILED);
            }
        };

        match self.repository.delete(existing.id()).await {
            Ok(()) => {
                debug!(user_id = id, "user deleted");
                Outcome::NoContent
            }
            Err(err) => Self::mutation_failed("delete", id, &err, messages::DELETE_FAILED),
        }
    }
}

#[cfg(test)]
#[path = "user_resolver_tests.rs"]
mod tests;
