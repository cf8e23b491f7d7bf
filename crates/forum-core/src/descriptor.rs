//! Operation descriptors.
//!
//! A descriptor declares, once per operation at registration time, which
//! interception steps apply to that operation: login check, parameter
//! validation, and the daily frequency kind it counts against.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of daily-rate-limited operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FrequencyKind {
    /// Not subject to frequency limiting
    #[default]
    None,
    /// Posting a new article
    PostArticle,
    /// Posting a comment
    PostComment,
    /// Liking an article or comment
    Like,
    /// Uploading an image
    ImageUpload,
}

impl FrequencyKind {
    /// Stable key for this kind, embedded in session attribute keys.
    pub fn key(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PostArticle => "post_article",
            Self::PostComment => "post_comment",
            Self::Like => "like",
            Self::ImageUpload => "image_upload",
        }
    }
}

impl fmt::Display for FrequencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Declarative interception requirements for one operation.
///
/// Immutable once registered. A default descriptor requires nothing and the
/// interceptor passes the operation through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperationDescriptor {
    /// Whether the caller must carry an authenticated session identity.
    pub check_login: bool,
    /// Whether declared parameter constraints are validated.
    pub check_params: bool,
    /// Daily frequency kind this operation counts against.
    pub frequency: FrequencyKind,
}

impl OperationDescriptor {
    /// Creates a descriptor with no interception requirements.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires an authenticated session.
    pub fn with_login(mut self) -> Self {
        self.check_login = true;
        self
    }

    /// Enables parameter validation.
    pub fn with_params(mut self) -> Self {
        self.check_params = true;
        self
    }

    /// Counts the operation against a daily frequency kind.
    pub fn with_frequency(mut self, kind: FrequencyKind) -> Self {
        self.frequency = kind;
        self
    }
}
