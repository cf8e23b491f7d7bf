//! Persistence collaborator for daily operation counts.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::descriptor::FrequencyKind;
use crate::error::Result;

/// Counts a user's persisted records of one operation kind over a date range.
///
/// This is the authoritative source the frequency limiter derives its
/// baseline from on the first check of a session-day. Implementations back
/// onto whatever stores the forum's articles, comments and like records.
#[async_trait]
pub trait OperationCountRepository: Send + Sync {
    /// Number of records `user_id` created with `kind` between `start` and
    /// `end`, both inclusive.
    async fn count_in_range(
        &self,
        user_id: &str,
        kind: FrequencyKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<u32>;
}
