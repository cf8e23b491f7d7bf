//! System settings: snapshot model, process-wide cache, and the persisted
//! row format.

pub mod cache;
pub mod model;
pub mod repository;

pub use cache::SettingsCache;
pub use model::{CommentSettings, LikeSettings, PostSettings, SettingCode, SystemSettings};
pub use repository::{SettingRow, SettingsRepository};
