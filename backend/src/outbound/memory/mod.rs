//! In-memory user persistence adapter.
//!
//! Records live in a `BTreeMap` keyed by [`UserId`], so listing yields id
//! order. Identifiers come from a monotonic counter starting at `1` and are
//! never reissued, even after a delete.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft, UserId};

/// Process-local [`UserRepository`] backed by a locked map.
#[derive(Debug)]
pub struct MemoryUserRepository {
    users: RwLock<BTreeMap<UserId, User>>,
    next_id: AtomicU64,
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl MemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&self) -> UserId {
        UserId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }
}

fn poisoned<T>(_: PoisonError<T>) -> UserPersistenceError {
    UserPersistenceError::query("user store lock poisoned")
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, draft: UserDraft) -> Result<User, UserPersistenceError> {
        let mut users = self.users.write().map_err(poisoned)?;
        let user = User::new(self.allocate_id(), draft);
        users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(&id).cloned())
    }

    async fn update(&self, id: UserId, draft: UserDraft) -> Result<User, UserPersistenceError> {
        let mut users = self.users.write().map_err(poisoned)?;
        let slot = users
            .get_mut(&id)
            .ok_or_else(|| UserPersistenceError::not_found(id))?;
        *slot = slot.replaced_with(draft);
        Ok(slot.clone())
    }

    async fn delete(&self, id: UserId) -> Result<(), UserPersistenceError> {
        let mut users = self.users.write().map_err(poisoned)?;
        users
            .remove(&id)
            .map(drop)
            .ok_or_else(|| UserPersistenceError::not_found(id))
    }
}
