//! File-backed settings repository.
//!
//! Stores the settings rows as one JSON document at a caller-supplied path.
//! Stands in for the settings table in deployments without a database.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use forum_core::ForumError;
use forum_core::error::Result;
use forum_core::settings::{SettingRow, SettingsRepository};

/// Settings repository persisting rows to a JSON file.
///
/// A missing file loads as an empty row set; the file and its parent
/// directory are created on first write.
pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    async fn read_rows(&self) -> Result<Vec<SettingRow>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ForumError::io(format!("failed to read settings file: {}", e)))?;

        let rows: Vec<SettingRow> = serde_json::from_str(&content)?;
        Ok(rows)
    }

    async fn write_rows(&self, rows: &[SettingRow]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ForumError::io(format!("failed to create settings dir: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(rows)?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| ForumError::io(format!("failed to write settings file: {}", e)))?;
        Ok(())
    }
}

#[async_trait]
impl SettingsRepository for FileSettingsRepository {
    async fn load_all(&self) -> Result<Vec<SettingRow>> {
        self.read_rows().await
    }

    async fn upsert(&self, row: SettingRow) -> Result<()> {
        let mut rows = self.read_rows().await?;
        match rows.iter_mut().find(|r| r.code == row.code) {
            Some(existing) => existing.json_content = row.json_content,
            None => rows.push(row),
        }
        self.write_rows(&rows).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("settings.json"));
        assert!(repo.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upsert_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileSettingsRepository::new(dir.path().join("nested").join("settings.json"));

        repo.upsert(SettingRow::new("sys_setting_post", r#"{"post_day_count_threshold":5}"#))
            .await
            .unwrap();
        repo.upsert(SettingRow::new("sys_setting_like", r#"{"like_day_count_threshold":9}"#))
            .await
            .unwrap();
        // replace the first row
        repo.upsert(SettingRow::new("sys_setting_post", r#"{"post_day_count_threshold":7}"#))
            .await
            .unwrap();

        let rows = repo.load_all().await.unwrap();
        assert_eq!(rows.len(), 2);
        let post = rows.iter().find(|r| r.code == "sys_setting_post").unwrap();
        assert_eq!(post.json_content, r#"{"post_day_count_threshold":7}"#);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        let repo = FileSettingsRepository::new(path);
        let err = repo.load_all().await.unwrap_err();
        assert!(matches!(err, ForumError::Serialization { .. }));
    }
}
