//! The durable unit of post history.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One published post, as recorded in the post store.
///
/// A record is created only after a successful publish, is never mutated,
/// and is never deleted by the engine. A record with no `external_post_id`
/// represents a dedup-log entry without confirmed publication.
///
/// # Examples
///
/// ```
/// use griot_core::{content_hash, PostRecord};
/// use chrono::{NaiveDate, Utc};
///
/// let message = "Did you know the first ironworks in the region...";
/// let record = PostRecord {
///     date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     topic: "Notable scientists and inventors".to_string(),
///     message: message.to_string(),
///     content_hash: content_hash(message),
///     sequence_number: 1,
///     external_post_id: Some("1234567890_42".to_string()),
///     timestamp: Utc::now(),
/// };
///
/// assert_eq!(record.sequence_number, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
pub struct PostRecord {
    /// Calendar date the post was made (process-local clock, day granularity)
    pub date: NaiveDate,
    /// Topic selected for this post, drawn from the catalog
    pub topic: String,
    /// Final text body actually published
    pub message: String,
    /// Deterministic fingerprint of `message`
    pub content_hash: String,
    /// 1-based ordinal of this post within its calendar day
    pub sequence_number: u32,
    /// Identifier returned by the publisher; `None` on an unconfirmed entry
    #[builder(default)]
    pub external_post_id: Option<String>,
    /// Wall-clock instant of recording, finer than `date`
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_hash;

    fn sample() -> PostRecord {
        PostRecord {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            topic: "Cuisine and traditional recipes".to_string(),
            message: "Jollof rice has three competing origin stories.".to_string(),
            content_hash: content_hash("Jollof rice has three competing origin stories."),
            sequence_number: 2,
            external_post_id: Some("page_99".to_string()),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn serde_round_trip_preserves_fields() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let back: PostRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn builder_defaults_external_post_id_to_none() {
        let record = PostRecordBuilder::default()
            .date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
            .topic("Festivals".to_string())
            .message("A festival post".to_string())
            .content_hash(content_hash("A festival post"))
            .sequence_number(1)
            .timestamp(Utc::now())
            .build()
            .unwrap();
        assert_eq!(record.external_post_id, None);
    }
}
