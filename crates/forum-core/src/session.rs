//! Session collaborator.
//!
//! The interception layer reads the authenticated identity and caches daily
//! operation counts through this seam; the web framework owns the actual
//! session storage.

use serde::{Deserialize, Serialize};

/// Authenticated user carried by a session.
///
/// Absence of this value signals "not logged in".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: String,
    pub nick_name: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl SessionUser {
    pub fn new(user_id: impl Into<String>, nick_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            nick_name: nick_name.into(),
            is_admin: false,
        }
    }
}

/// Server-side state scoped to one user's browsing period.
///
/// Attribute values are JSON so the store stays agnostic of what the layer
/// caches in it (daily counters, flags). Implementations are per-request
/// collaborators and must be safe to share across threads.
pub trait SessionStore: Send + Sync {
    /// The authenticated identity, if any.
    fn identity(&self) -> Option<SessionUser>;

    /// Marks the session as logged in.
    fn set_identity(&self, user: SessionUser);

    fn get_attribute(&self, key: &str) -> Option<serde_json::Value>;

    fn set_attribute(&self, key: &str, value: serde_json::Value);
}
