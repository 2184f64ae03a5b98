//! User data model and payload validation.
//!
//! [`UserPayload`] mirrors the optional wire fields. [`UserDraft`] is the only
//! shape persistence adapters accept, so a half-populated record cannot be
//! stored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors raised while building user values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// `name` was missing or empty.
    MissingName,
    /// `bio` was missing or empty.
    MissingBio,
    /// The identifier cannot name any stored user.
    InvalidId,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "user name must not be empty"),
            Self::MissingBio => write!(f, "user bio must not be empty"),
            Self::InvalidId => write!(f, "user id must be a non-negative integer"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier assigned by the persistence layer.
///
/// Serialised as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    /// Parse a path segment.
    ///
    /// Only canonical decimal digits are accepted so that every stored id has
    /// exactly one textual form: `+1`, `01` and ` 1` are rejected.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let canonical = !raw.is_empty()
            && raw.bytes().all(|b| b.is_ascii_digit())
            && (raw == "0" || !raw.starts_with('0'));
        if !canonical {
            return Err(UserValidationError::InvalidId);
        }
        raw.parse::<u64>()
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request body for creating or replacing a user.
///
/// Both fields are optional; [`UserPayload::into_draft`] decides whether the
/// payload is usable. Transport adapters lower whatever they received into
/// this shape, so a field that is missing or of the wrong type is `None`.
///
/// # Examples
/// ```
/// use users_api::domain::{UserPayload, UserValidationError};
///
/// let payload = UserPayload { name: Some("Ada".into()), bio: None };
/// assert_eq!(payload.into_draft(), Err(UserValidationError::MissingBio));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPayload {
    /// Display name of the user.
    pub name: Option<String>,
    /// Free-form biography.
    pub bio: Option<String>,
}

fn is_present(field: Option<&str>) -> bool {
    field.is_some_and(|value| !value.is_empty())
}

impl UserPayload {
    /// Build a payload with both fields set.
    pub fn new(name: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            bio: Some(bio.into()),
        }
    }

    /// Convert into a [`UserDraft`], reporting the first missing field.
    pub fn into_draft(self) -> Result<UserDraft, UserValidationError> {
        let Self { name, bio } = self;
        UserDraft::new(
            name.ok_or(UserValidationError::MissingName)?,
            bio.ok_or(UserValidationError::MissingBio)?,
        )
    }
}

/// Validated `name`/`bio` pair ready for persistence.
///
/// ## Invariants
/// - `name` and `bio` are non-empty strings; whitespace counts as content.
/// - Values are stored exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    name: String,
    bio: String,
}

impl UserDraft {
    /// Validate and construct a draft.
    pub fn new(
        name: impl Into<String>,
        bio: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let name = name.into();
        let bio = bio.into();
        if !is_present(Some(&name)) {
            return Err(UserValidationError::MissingName);
        }
        if !is_present(Some(&bio)) {
            return Err(UserValidationError::MissingBio);
        }
        Ok(Self { name, bio })
    }

    /// User name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// User biography.
    #[must_use]
    pub fn bio(&self) -> &str {
        self.bio.as_str()
    }
}

/// Persisted user record.
///
/// ## Invariants
/// - `name` and `bio` are always populated (see [`UserDraft`]).
///
/// # Examples
/// ```
/// use users_api::domain::{User, UserDraft, UserId};
///
/// let draft = UserDraft::new("Ada", "mathematician").expect("valid draft");
/// let user = User::new(UserId::new(1), draft);
/// let json = serde_json::to_value(&user).expect("serialise user");
/// assert_eq!(json["id"], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    name: String,
    bio: String,
}

impl User {
    /// Build a record from an assigned id and validated fields.
    #[must_use]
    pub fn new(id: UserId, draft: UserDraft) -> Self {
        let UserDraft { name, bio } = draft;
        Self { id, name, bio }
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// User name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// User biography.
    #[must_use]
    pub fn bio(&self) -> &str {
        self.bio.as_str()
    }

    /// Return a copy carrying `draft`'s fields under the same id.
    #[must_use]
    pub fn replaced_with(&self, draft: UserDraft) -> Self {
        Self::new(self.id, draft)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDto {
    id: UserId,
    name: String,
    bio: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User { id, name, bio } = value;
        Self { id, name, bio }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let UserDto { id, name, bio } = value;
        Ok(Self::new(id, UserDraft::new(name, bio)?))
    }
}
