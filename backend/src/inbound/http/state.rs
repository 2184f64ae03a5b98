//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on the
//! driving port, so they stay testable without real storage.

use std::sync::Arc;

use crate::domain::UserResolver;
use crate::domain::ports::{UserRepository, UsersResource};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Users resource use-cases.
    pub users: Arc<dyn UsersResource>,
}

impl HttpState {
    /// Wrap an existing port implementation.
    pub fn new(users: Arc<dyn UsersResource>) -> Self {
        Self { users }
    }

    /// Build state resolving requests against `repository`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use users_api::inbound::http::state::HttpState;
    /// use users_api::outbound::memory::MemoryUserRepository;
    ///
    /// let state = HttpState::with_repository(Arc::new(MemoryUserRepository::new()));
    /// let _users = state.users.clone();
    /// ```
    pub fn with_repository<R>(repository: Arc<R>) -> Self
    where
        R: UserRepository + 'static,
    {
        Self::new(Arc::new(UserResolver::new(repository)))
    }
}
