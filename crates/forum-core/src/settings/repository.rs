//! Settings persistence collaborator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One persisted settings row: a section code plus its JSON content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingRow {
    pub code: String,
    pub json_content: String,
}

impl SettingRow {
    pub fn new(code: impl Into<String>, json_content: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            json_content: json_content.into(),
        }
    }
}

/// An abstract repository for the settings table.
///
/// Decouples the settings service from the storage mechanism (database
/// table, JSON file, in-memory map).
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Loads every persisted settings row.
    async fn load_all(&self) -> Result<Vec<SettingRow>>;

    /// Inserts the row, or replaces the row with the same code.
    async fn upsert(&self, row: SettingRow) -> Result<()>;
}
