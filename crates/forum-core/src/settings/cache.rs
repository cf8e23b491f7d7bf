//! Process-wide settings cache.
//!
//! Read-mostly store holding the current [`SystemSettings`] snapshot.
//! The external settings-save workflow calls [`SettingsCache::refresh`]
//! once per persisted change; any number of readers call
//! [`SettingsCache::get`] concurrently. Last writer wins, no versioning.

use std::sync::{Arc, RwLock};

use super::model::SystemSettings;

/// Cloneable handle to the shared settings snapshot.
///
/// Cloning the handle shares the underlying slot; every reader sees the
/// last-refreshed snapshot. Before the first refresh, readers see the
/// default snapshot.
#[derive(Debug, Clone)]
pub struct SettingsCache {
    inner: Arc<RwLock<Arc<SystemSettings>>>,
}

impl SettingsCache {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(SystemSettings::default()))),
        }
    }

    /// Returns the last-refreshed snapshot.
    pub fn get(&self) -> Arc<SystemSettings> {
        self.inner.read().unwrap().clone()
    }

    /// Replaces the snapshot wholesale.
    pub fn refresh(&self, snapshot: SystemSettings) {
        *self.inner.write().unwrap() = Arc::new(snapshot);
    }
}

impl Default for SettingsCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_before_first_refresh() {
        let cache = SettingsCache::new();
        assert_eq!(*cache.get(), SystemSettings::default());
    }

    #[test]
    fn test_refresh_replaces_wholesale() {
        let cache = SettingsCache::new();
        let mut snapshot = SystemSettings::default();
        snapshot.post.post_day_count_threshold = 3;
        cache.refresh(snapshot.clone());
        assert_eq!(*cache.get(), snapshot);
    }

    #[test]
    fn test_clones_share_the_slot() {
        let cache = SettingsCache::new();
        let reader = cache.clone();
        let mut snapshot = SystemSettings::default();
        snapshot.like.like_day_count_threshold = 7;
        cache.refresh(snapshot);
        assert_eq!(reader.get().like.like_day_count_threshold, 7);
    }

    #[test]
    fn test_reader_keeps_old_snapshot_across_refresh() {
        let cache = SettingsCache::new();
        let before = cache.get();
        let mut snapshot = SystemSettings::default();
        snapshot.comment.comment_day_count_threshold = 1;
        cache.refresh(snapshot);
        // the Arc handed out earlier still points at the old snapshot
        assert_eq!(before.comment.comment_day_count_threshold, 100);
        assert_eq!(cache.get().comment.comment_day_count_threshold, 1);
    }
}
