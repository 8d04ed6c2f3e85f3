//! # Identity
//!
//! This crate provides user identity primitives for the file-listing crates.
//!
//! ## Philosophy
//!
//! - **Identity is explicit and contextual, not global**
//! - **The "current user" is a capability handed in, not ambient state**
//! - **Testability first; no hidden global state**
//!
//! ## Core Concepts
//!
//! - `UserId`: Login name of a user, used to build per-user paths
//! - `CurrentUser`: The authenticated user as reported by the host application
//! - `CurrentUserProvider`: Seam through which callers answer "who is logged in?"
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - Authentication or session handling
//! - Access control

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Login name of a user
///
/// User IDs appear verbatim inside paths such as `/<uid>/files`, so a
/// well-formed ID is non-empty and contains no path separator.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a user ID without validation
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }

    /// Creates a user ID, rejecting empty names and names containing `/`
    pub fn parse(uid: &str) -> Result<Self, IdentityError> {
        if uid.is_empty() {
            return Err(IdentityError::EmptyUserId);
        }
        if uid.contains('/') {
            return Err(IdentityError::InvalidUserId(uid.to_string()));
        }
        Ok(Self(uid.to_string()))
    }

    /// Returns the login name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(uid: &str) -> Self {
        Self::new(uid)
    }
}

/// The authenticated user of the hosting application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// Login name
    pub uid: UserId,
    /// Human readable name, if the host provides one
    #[serde(default)]
    pub display_name: Option<String>,
    /// Whether the user is an administrator
    #[serde(default)]
    pub is_admin: bool,
}

impl CurrentUser {
    /// Creates a non-admin user with no display name
    pub fn new(uid: impl Into<UserId>) -> Self {
        Self {
            uid: uid.into(),
            display_name: None,
            is_admin: false,
        }
    }

    /// Sets the display name
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }
}

/// Resolves the currently authenticated user
///
/// Implementations must be side-effect free reads; a `None` answer means no
/// user is logged in.
pub trait CurrentUserProvider: Send + Sync {
    /// Returns the authenticated user, if any
    fn current_user(&self) -> Option<CurrentUser>;
}

impl<T: CurrentUserProvider + ?Sized> CurrentUserProvider for Arc<T> {
    fn current_user(&self) -> Option<CurrentUser> {
        (**self).current_user()
    }
}

impl<T: CurrentUserProvider + ?Sized> CurrentUserProvider for &T {
    fn current_user(&self) -> Option<CurrentUser> {
        (**self).current_user()
    }
}

/// Provider that always reports the same user
#[derive(Debug, Clone)]
pub struct StaticUserProvider {
    user: CurrentUser,
}

impl StaticUserProvider {
    /// Creates a provider for the given user
    pub fn new(user: CurrentUser) -> Self {
        Self { user }
    }

    /// Shorthand for a provider of a plain user ID
    pub fn uid(uid: impl Into<UserId>) -> Self {
        Self::new(CurrentUser::new(uid))
    }
}

impl CurrentUserProvider for StaticUserProvider {
    fn current_user(&self) -> Option<CurrentUser> {
        Some(self.user.clone())
    }
}

/// Provider for contexts with nobody logged in
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCurrentUser;

impl CurrentUserProvider for NoCurrentUser {
    fn current_user(&self) -> Option<CurrentUser> {
        None
    }
}

/// Identity-related errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("User ID is empty")]
    EmptyUserId,

    #[error("Invalid user ID: {0:?} contains a path separator")]
    InvalidUserId(String),
}
