//! Topic selection against the repeat window.

use crate::DeduplicationEngine;
use chrono::NaiveDate;
use griot_core::TopicCatalog;
use griot_error::GriotResult;
use griot_interface::PostStore;
use tracing::{debug, warn};

/// Outcome of topic selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicChoice {
    /// The selected topic
    pub topic: String,
    /// True when every catalog topic was recently used and the choice fell
    /// back to a uniformly random repeat
    pub exhausted_fallback: bool,
}

/// Picks an unused topic for the next post.
///
/// Traversal order is randomized per pick so the catalog's head does not
/// dominate; the first topic outside the repeat window wins.
pub struct TopicSelector<'a, S: PostStore + ?Sized> {
    catalog: &'a TopicCatalog,
    store: &'a S,
}

impl<'a, S: PostStore + ?Sized> TopicSelector<'a, S> {
    /// Create a selector over the given catalog and history store.
    pub fn new(catalog: &'a TopicCatalog, store: &'a S) -> Self {
        Self { catalog, store }
    }

    /// Pick a topic for a post on `today`.
    ///
    /// Shuffles the catalog and scans for the first topic not used within
    /// the repeat window. If every topic is recent, the selection knowingly
    /// relaxes the no-repeat rule: it returns a uniformly random topic from
    /// the full catalog, flags the choice, and logs at WARN. Repetition is
    /// a last resort, never the first choice.
    pub async fn pick_topic(&self, today: NaiveDate) -> GriotResult<TopicChoice> {
        let dedup = DeduplicationEngine::new(self.store);

        for topic in self.catalog.shuffled() {
            if !dedup.is_recent_topic(&topic, today).await? {
                debug!(topic = %topic, "Selected unused topic");
                return Ok(TopicChoice {
                    topic,
                    exhausted_fallback: false,
                });
            }
        }

        let topic = self.catalog.random().to_string();
        warn!(
            topic = %topic,
            "Every catalog topic was used within the repeat window; repeating one at random"
        );
        Ok(TopicChoice {
            topic,
            exhausted_fallback: true,
        })
    }
}
