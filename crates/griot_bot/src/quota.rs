//! Daily post quota derived from recorded history.

use chrono::NaiveDate;
use griot_error::GriotResult;
use griot_interface::PostStore;

/// Counts posts already made on a date and exposes remaining quota.
///
/// Quota is derived entirely from the store, never from in-memory counters,
/// so it stays correct across crashes and independently scheduled
/// invocations sharing the same backing store.
pub struct QuotaTracker<'a, S: PostStore + ?Sized> {
    store: &'a S,
    daily_limit: u32,
}

impl<'a, S: PostStore + ?Sized> QuotaTracker<'a, S> {
    /// Create a tracker for the given store and daily limit.
    pub fn new(store: &'a S, daily_limit: u32) -> Self {
        Self { store, daily_limit }
    }

    /// Number of posts recorded on the date.
    pub async fn used(&self, date: NaiveDate) -> GriotResult<u32> {
        let records = self.store.records_for_date(date).await?;
        Ok(records.len() as u32)
    }

    /// Posts still permitted on the date, floored at zero.
    pub async fn remaining(&self, date: NaiveDate) -> GriotResult<u32> {
        let used = self.used(date).await?;
        Ok(self.daily_limit.saturating_sub(used))
    }

    /// True while at least one post slot remains.
    pub async fn has_capacity(&self, date: NaiveDate) -> GriotResult<bool> {
        Ok(self.remaining(date).await? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use griot_core::{content_hash, PostRecord};
    use griot_store::MemoryStore;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn record(date: NaiveDate, seq: u32) -> PostRecord {
        let message = format!("post {seq}");
        PostRecord {
            date,
            topic: format!("topic {seq}"),
            content_hash: content_hash(&message),
            message,
            sequence_number: seq,
            external_post_id: None,
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn remaining_counts_down_from_limit() {
        let store = MemoryStore::with_records(vec![record(day(1), 1)]);
        let quota = QuotaTracker::new(&store, 3);

        assert_eq!(quota.used(day(1)).await.unwrap(), 1);
        assert_eq!(quota.remaining(day(1)).await.unwrap(), 2);
        assert!(quota.has_capacity(day(1)).await.unwrap());
    }

    #[tokio::test]
    async fn remaining_floors_at_zero_when_over_limit() {
        // Degraded state: more records than the limit, e.g. after the limit
        // was lowered. Remaining must not underflow.
        let store =
            MemoryStore::with_records(vec![record(day(1), 1), record(day(1), 2), record(day(1), 3)]);
        let quota = QuotaTracker::new(&store, 2);

        assert_eq!(quota.remaining(day(1)).await.unwrap(), 0);
        assert!(!quota.has_capacity(day(1)).await.unwrap());
    }

    #[tokio::test]
    async fn quota_is_per_date() {
        let store = MemoryStore::with_records(vec![record(day(1), 1), record(day(1), 2)]);
        let quota = QuotaTracker::new(&store, 2);

        assert!(!quota.has_capacity(day(1)).await.unwrap());
        assert!(quota.has_capacity(day(2)).await.unwrap());
    }
}
