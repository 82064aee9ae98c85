//! Trait definitions for the engine's external collaborators.

use crate::PostId;
use async_trait::async_trait;
use chrono::NaiveDate;
use griot_core::PostRecord;
use griot_error::GriotResult;

/// Capability seam for text and image generation.
///
/// A call either returns usable content or fails; there is no partial or
/// streaming result. Timeouts are the implementation's responsibility — the
/// engine treats "took too long" and "errored" identically.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Produce post text for a topic, guided by a rendered style prompt.
    async fn generate_text(&self, topic: &str, style: &str) -> GriotResult<String>;

    /// Produce image bytes for a topic, guided by a style hint.
    ///
    /// Image generation is best-effort from the engine's point of view:
    /// failure here degrades the post to text-only rather than aborting it.
    async fn generate_image(&self, topic: &str, style: &str) -> GriotResult<Vec<u8>>;
}

/// Capability seam for publishing a post to the page.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publish text with an optional attached image.
    ///
    /// Returns the external identifier of the created post on success.
    async fn publish(&self, text: &str, image: Option<&[u8]>) -> GriotResult<PostId>;
}

/// Durable, append-only record of what has been posted.
///
/// The store is the single source of truth for dedup and quota decisions:
/// the engine never keeps in-memory counters, so independent invocations
/// sharing a backing store resume correctly after restarts. The engine
/// assumes at most one producer process is active at a time; the store is
/// not required to resolve concurrent appends.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All records on the given date.
    ///
    /// Insertion order is irrelevant to callers but must be stable for a
    /// single query.
    async fn records_for_date(&self, date: NaiveDate) -> GriotResult<Vec<PostRecord>>;

    /// All records with `date >= since`, used for the rolling topic window.
    async fn records_since(&self, since: NaiveDate) -> GriotResult<Vec<PostRecord>>;

    /// Durably persist one new record before returning.
    ///
    /// There is no update or delete: history is append-only.
    async fn append(&self, record: &PostRecord) -> GriotResult<()>;
}
