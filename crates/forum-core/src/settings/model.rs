//! System settings snapshot.
//!
//! Each section is persisted as one JSON row keyed by a [`SettingCode`] and
//! deserialized independently, so a partial settings table still produces a
//! complete snapshot with defaults filling the gaps.

use serde::{Deserialize, Serialize};

use crate::descriptor::FrequencyKind;

/// Posting-related thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostSettings {
    /// Maximum articles a user may post per day.
    pub post_day_count_threshold: u32,
    /// Maximum images a user may upload per day.
    pub day_image_upload_count: u32,
}

impl Default for PostSettings {
    fn default() -> Self {
        Self {
            post_day_count_threshold: 30,
            day_image_upload_count: 50,
        }
    }
}

/// Comment-related thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentSettings {
    /// Maximum comments a user may post per day.
    pub comment_day_count_threshold: u32,
}

impl Default for CommentSettings {
    fn default() -> Self {
        Self {
            comment_day_count_threshold: 100,
        }
    }
}

/// Like-related thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LikeSettings {
    /// Maximum likes a user may record per day.
    pub like_day_count_threshold: u32,
}

impl Default for LikeSettings {
    fn default() -> Self {
        Self {
            like_day_count_threshold: 200,
        }
    }
}

/// Immutable snapshot of the whole settings table.
///
/// Replaced wholesale on refresh; never partially updated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemSettings {
    pub post: PostSettings,
    pub comment: CommentSettings,
    pub like: LikeSettings,
}

impl SystemSettings {
    /// Daily threshold for a frequency kind.
    ///
    /// Returns `None` for [`FrequencyKind::None`], which is never limited.
    pub fn threshold(&self, kind: FrequencyKind) -> Option<u32> {
        match kind {
            FrequencyKind::None => None,
            FrequencyKind::PostArticle => Some(self.post.post_day_count_threshold),
            FrequencyKind::PostComment => Some(self.comment.comment_day_count_threshold),
            FrequencyKind::Like => Some(self.like.like_day_count_threshold),
            FrequencyKind::ImageUpload => Some(self.post.day_image_upload_count),
        }
    }
}

/// Persisted row code for each settings section.
///
/// Registration-time mapping from row code to snapshot section; the settings
/// service matches on this instead of introspecting the snapshot type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingCode {
    Post,
    Comment,
    Like,
}

impl SettingCode {
    pub const ALL: [SettingCode; 3] = [Self::Post, Self::Comment, Self::Like];

    /// Row code as stored in the settings table.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Post => "sys_setting_post",
            Self::Comment => "sys_setting_comment",
            Self::Like => "sys_setting_like",
        }
    }

    /// Reverse lookup from a persisted row code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}
