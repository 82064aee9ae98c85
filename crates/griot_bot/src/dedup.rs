//! Duplicate detection against recorded post history.

use chrono::{Duration, NaiveDate};
use griot_core::content_hash;
use griot_error::GriotResult;
use griot_interface::PostStore;

/// Width of the rolling topic-repeat window in days.
///
/// The window covers today and the prior two calendar dates, boundary
/// inclusive: a topic posted exactly two days ago still blocks reuse.
pub const TOPIC_WINDOW_DAYS: i64 = 2;

/// Decides whether a candidate message or topic counts as a repeat.
///
/// Both checks are exact-match only — hash equality for messages, string
/// equality for topics. Near-duplicate paraphrases are deliberately not
/// caught; that simplification is part of the contract.
pub struct DeduplicationEngine<'a, S: PostStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: PostStore + ?Sized> DeduplicationEngine<'a, S> {
    /// Create an engine reading from the given store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// True if a record on `date` already carries this exact message.
    pub async fn is_duplicate_message(
        &self,
        candidate: &str,
        date: NaiveDate,
    ) -> GriotResult<bool> {
        let hash = content_hash(candidate);
        let records = self.store.records_for_date(date).await?;
        Ok(records.iter().any(|r| r.content_hash == hash))
    }

    /// True if this exact topic appears within the rolling window.
    pub async fn is_recent_topic(&self, topic: &str, today: NaiveDate) -> GriotResult<bool> {
        let window_start = today - Duration::days(TOPIC_WINDOW_DAYS);
        let records = self.store.records_since(window_start).await?;
        Ok(records.iter().any(|r| r.topic == topic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use griot_core::PostRecord;
    use griot_store::MemoryStore;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn record(date: NaiveDate, topic: &str, message: &str) -> PostRecord {
        PostRecord {
            date,
            topic: topic.to_string(),
            message: message.to_string(),
            content_hash: content_hash(message),
            sequence_number: 1,
            external_post_id: None,
            timestamp: Utc::now(),
        }
    }

    #[tokio::test]
    async fn exact_message_on_same_day_is_duplicate() {
        let store = MemoryStore::with_records(vec![record(day(10), "Music", "Same words")]);
        let dedup = DeduplicationEngine::new(&store);

        assert!(dedup.is_duplicate_message("Same words", day(10)).await.unwrap());
        assert!(!dedup.is_duplicate_message("Other words", day(10)).await.unwrap());
    }

    #[tokio::test]
    async fn same_message_on_another_day_is_not_duplicate() {
        let store = MemoryStore::with_records(vec![record(day(9), "Music", "Same words")]);
        let dedup = DeduplicationEngine::new(&store);

        assert!(!dedup.is_duplicate_message("Same words", day(10)).await.unwrap());
    }

    #[tokio::test]
    async fn topic_exactly_two_days_old_still_blocks() {
        let store = MemoryStore::with_records(vec![record(day(8), "Festivals", "A post")]);
        let dedup = DeduplicationEngine::new(&store);

        assert!(dedup.is_recent_topic("Festivals", day(10)).await.unwrap());
    }

    #[tokio::test]
    async fn topic_three_days_old_is_free_again() {
        let store = MemoryStore::with_records(vec![record(day(7), "Festivals", "A post")]);
        let dedup = DeduplicationEngine::new(&store);

        assert!(!dedup.is_recent_topic("Festivals", day(10)).await.unwrap());
    }

    #[tokio::test]
    async fn topic_match_is_exact_string_equality() {
        let store = MemoryStore::with_records(vec![record(day(10), "Festivals", "A post")]);
        let dedup = DeduplicationEngine::new(&store);

        assert!(!dedup.is_recent_topic("festivals", day(10)).await.unwrap());
    }
}
