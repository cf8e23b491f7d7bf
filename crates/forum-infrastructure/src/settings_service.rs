//! Settings refresh and save workflow.
//!
//! Rebuilds the [`SystemSettings`] snapshot from persisted rows and swaps it
//! into the shared cache, and persists edited settings back to their rows.

use std::sync::Arc;

use forum_core::error::Result;
use forum_core::settings::{SettingCode, SettingRow, SettingsCache, SettingsRepository, SystemSettings};

/// Service owning the settings refresh/save workflow.
#[derive(Clone)]
pub struct SettingsService {
    repository: Arc<dyn SettingsRepository>,
    cache: SettingsCache,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn SettingsRepository>, cache: SettingsCache) -> Self {
        Self { repository, cache }
    }

    /// Rebuilds the snapshot from storage and swaps it into the cache.
    ///
    /// Rows with an unknown code or malformed JSON are logged and skipped;
    /// their sections keep default values. Returns the refreshed snapshot.
    pub async fn refresh_cache(&self) -> Result<SystemSettings> {
        let rows = self.repository.load_all().await?;

        let mut snapshot = SystemSettings::default();
        for row in rows {
            let Some(code) = SettingCode::from_code(&row.code) else {
                tracing::warn!("Skipping settings row with unknown code: {}", row.code);
                continue;
            };
            if let Err(e) = Self::apply_row(&mut snapshot, code, &row.json_content) {
                tracing::warn!("Skipping malformed settings row {}: {}", row.code, e);
            }
        }

        self.cache.refresh(snapshot.clone());
        tracing::info!("Settings cache refreshed");
        Ok(snapshot)
    }

    /// Persists every section of `settings` and refreshes the cache once.
    pub async fn save_settings(&self, settings: &SystemSettings) -> Result<()> {
        for code in SettingCode::ALL {
            let json_content = match code {
                SettingCode::Post => serde_json::to_string(&settings.post)?,
                SettingCode::Comment => serde_json::to_string(&settings.comment)?,
                SettingCode::Like => serde_json::to_string(&settings.like)?,
            };
            self.repository
                .upsert(SettingRow::new(code.code(), json_content))
                .await?;
        }

        self.refresh_cache().await?;
        Ok(())
    }

    fn apply_row(snapshot: &mut SystemSettings, code: SettingCode, json: &str) -> Result<()> {
        match code {
            SettingCode::Post => snapshot.post = serde_json::from_str(json)?,
            SettingCode::Comment => snapshot.comment = serde_json::from_str(json)?,
            SettingCode::Like => snapshot.like = serde_json::from_str(json)?,
        }
        Ok(())
    }
}
