//! In-memory collaborator implementations.
//!
//! The session store mirrors a servlet-container session (an in-process
//! attribute map); the repositories back the interception layer in tests and
//! single-process deployments.

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use chrono::NaiveDate;

use forum_core::descriptor::FrequencyKind;
use forum_core::error::Result;
use forum_core::repository::OperationCountRepository;
use forum_core::session::{SessionStore, SessionUser};
use forum_core::settings::{SettingRow, SettingsRepository};

/// Session store backed by an in-process attribute map.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    identity: Mutex<Option<SessionUser>>,
    attributes: Mutex<HashMap<String, serde_json::Value>>,
}

impl InMemorySessionStore {
    /// Creates an anonymous session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session already carrying an authenticated identity.
    pub fn logged_in(user: SessionUser) -> Self {
        let store = Self::new();
        store.set_identity(user);
        store
    }
}

impl SessionStore for InMemorySessionStore {
    fn identity(&self) -> Option<SessionUser> {
        self.identity.lock().unwrap().clone()
    }

    fn set_identity(&self, user: SessionUser) {
        *self.identity.lock().unwrap() = Some(user);
    }

    fn get_attribute(&self, key: &str) -> Option<serde_json::Value> {
        self.attributes.lock().unwrap().get(key).cloned()
    }

    fn set_attribute(&self, key: &str, value: serde_json::Value) {
        self.attributes.lock().unwrap().insert(key.to_string(), value);
    }
}

/// One persisted operation record, the unit the limiter counts.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CountRecord {
    user_id: String,
    kind: FrequencyKind,
    day: NaiveDate,
}

/// Count repository over an in-memory record list.
#[derive(Debug, Default)]
pub struct InMemoryOperationCountRepository {
    records: RwLock<Vec<CountRecord>>,
}

impl InMemoryOperationCountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one persisted operation for `user_id` on `day`.
    pub fn insert_record(&self, user_id: impl Into<String>, kind: FrequencyKind, day: NaiveDate) {
        self.records.write().unwrap().push(CountRecord {
            user_id: user_id.into(),
            kind,
            day,
        });
    }
}

#[async_trait]
impl OperationCountRepository for InMemoryOperationCountRepository {
    async fn count_in_range(
        &self,
        user_id: &str,
        kind: FrequencyKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<u32> {
        let records = self.records.read().unwrap();
        let count = records
            .iter()
            .filter(|r| r.user_id == user_id && r.kind == kind && r.day >= start && r.day <= end)
            .count();
        Ok(count as u32)
    }
}

/// Settings repository over an in-memory row map.
#[derive(Debug, Default)]
pub struct InMemorySettingsRepository {
    rows: RwLock<HashMap<String, String>>,
}

impl InMemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-seeded with rows.
    pub fn with_rows(rows: impl IntoIterator<Item = SettingRow>) -> Self {
        let repository = Self::new();
        {
            let mut map = repository.rows.write().unwrap();
            for row in rows {
                map.insert(row.code, row.json_content);
            }
        }
        repository
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn load_all(&self) -> Result<Vec<SettingRow>> {
        let rows = self.rows.read().unwrap();
        let mut all: Vec<SettingRow> = rows
            .iter()
            .map(|(code, json_content)| SettingRow::new(code.clone(), json_content.clone()))
            .collect();
        all.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(all)
    }

    async fn upsert(&self, row: SettingRow) -> Result<()> {
        self.rows.write().unwrap().insert(row.code, row.json_content);
        Ok(())
    }
}
