//! Per-user-per-day frequency limiting.
//!
//! Counters live in the caller's session under a key that embeds the current
//! date, so day rollover implicitly resets them. The first check of a
//! session-day derives its baseline from the persisted record count for that
//! kind; image uploads are counted purely in-session and start at zero.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use forum_core::descriptor::FrequencyKind;
use forum_core::error::{ForumError, Result};
use forum_core::repository::OperationCountRepository;
use forum_core::session::SessionStore;
use forum_core::settings::SettingsCache;

const SESSION_KEY_FREQUENCY: &str = "frequency";

/// Admission control for daily-rate-limited operations.
pub struct FrequencyLimiter {
    counts: Arc<dyn OperationCountRepository>,
    settings: SettingsCache,
}

impl FrequencyLimiter {
    pub fn new(counts: Arc<dyn OperationCountRepository>, settings: SettingsCache) -> Self {
        Self { counts, settings }
    }

    fn session_key(kind: FrequencyKind, day: NaiveDate) -> String {
        format!(
            "{}:{}:{}",
            SESSION_KEY_FREQUENCY,
            day.format("%Y-%m-%d"),
            kind.key()
        )
    }

    fn cached_count(session: &dyn SessionStore, key: &str) -> Option<u32> {
        session
            .get_attribute(key)
            .and_then(|value| value.as_u64())
            .map(|value| value as u32)
    }

    /// Decides whether one more operation of `kind` is allowed today.
    ///
    /// On admission the resolved count is cached in the session; on denial
    /// nothing is written, and the next check re-derives the same baseline.
    /// The threshold is read fresh from the settings snapshot on every check.
    pub async fn check(&self, session: &dyn SessionStore, kind: FrequencyKind) -> Result<()> {
        let Some(threshold) = self.settings.get().threshold(kind) else {
            return Ok(());
        };

        let user = session.identity().ok_or(ForumError::Unauthorized)?;
        let today = Local::now().date_naive();
        let key = Self::session_key(kind, today);

        let count = match Self::cached_count(session, &key) {
            Some(count) => count,
            None => match kind {
                // counted purely in-session, no persisted baseline
                FrequencyKind::ImageUpload => 0,
                _ => {
                    self.counts
                        .count_in_range(&user.user_id, kind, today, today)
                        .await?
                }
            },
        };

        if count >= threshold {
            return Err(ForumError::rate_limited(kind));
        }

        session.set_attribute(&key, count.into());
        Ok(())
    }

    /// Records one admitted-and-successful operation of `kind`.
    ///
    /// Increments the session-cached counter by exactly one; never
    /// decrements.
    pub fn record_success(&self, session: &dyn SessionStore, kind: FrequencyKind) {
        if kind == FrequencyKind::None {
            return;
        }
        let today = Local::now().date_naive();
        let key = Self::session_key(kind, today);
        let count = Self::cached_count(session, &key).unwrap_or(0);
        session.set_attribute(&key, (count + 1).into());
    }
}
