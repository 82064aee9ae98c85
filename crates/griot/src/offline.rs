//! Offline collaborator backends.
//!
//! These stand-ins let every mode of the binary run end-to-end with no
//! network: the generator composes deterministic local text and the
//! publisher logs instead of posting. Real API backends implement the same
//! [`ContentGenerator`](griot_interface::ContentGenerator) and
//! [`Publisher`](griot_interface::Publisher) traits and slot in unchanged.

use async_trait::async_trait;
use griot_error::GriotResult;
use griot_interface::{ContentGenerator, PostId, Publisher};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Generator that composes text locally instead of calling an AI backend.
///
/// Output varies per call via an internal counter, so the uniqueness retry
/// loop behaves the same as with a real backend.
#[derive(Debug, Default)]
pub struct OfflineGenerator {
    drafts: AtomicU64,
}

impl OfflineGenerator {
    /// Create a generator with a fresh draft counter.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentGenerator for OfflineGenerator {
    async fn generate_text(&self, topic: &str, style: &str) -> GriotResult<String> {
        let draft = self.drafts.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!(
            "{style}\n\nDraft {draft}: a few words on {topic}, offline edition. #offline #draft"
        ))
    }

    async fn generate_image(&self, topic: &str, style: &str) -> GriotResult<Vec<u8>> {
        // No local renderer; an empty result degrades the post to text-only
        // through the pipeline's best-effort image path.
        info!(topic = %topic, style = %style, "Offline backend produces no image");
        Ok(Vec::new())
    }
}

/// Publisher that logs the post instead of delivering it anywhere.
#[derive(Debug, Default)]
pub struct ConsolePublisher {
    posts: AtomicU64,
}

impl ConsolePublisher {
    /// Create a publisher with a fresh post counter.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Publisher for ConsolePublisher {
    async fn publish(&self, text: &str, image: Option<&[u8]>) -> GriotResult<PostId> {
        let number = self.posts.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            chars = text.len(),
            image_bytes = image.map(<[u8]>::len).unwrap_or(0),
            "Publishing to console"
        );
        println!("--- post {number} ---\n{text}\n");
        Ok(PostId::new(format!("console_{number}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn offline_text_is_unique_per_call() {
        let generator = OfflineGenerator::new();
        let a = generator.generate_text("markets", "Style.").await.unwrap();
        let b = generator.generate_text("markets", "Style.").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn console_publisher_returns_sequential_ids() {
        let publisher = ConsolePublisher::new();
        let first = publisher.publish("hello", None).await.unwrap();
        let second = publisher.publish("again", None).await.unwrap();
        assert_eq!(first.as_str(), "console_1");
        assert_eq!(second.as_str(), "console_2");
    }
}
