//! The posting pipeline state machine.

use crate::{BotConfig, DeduplicationEngine, QuotaTracker, TopicSelector};
use chrono::{Local, NaiveDate, Utc};
use griot_core::{content_hash, refine_message, style_hint, PostRecord, StyleCatalog, TopicCatalog};
use griot_error::{GriotResult, PipelineError, PipelineErrorKind};
use griot_interface::{ContentGenerator, PostStore, Publisher};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Bounded number of generation attempts per post slot.
pub const MAX_GENERATION_ATTEMPTS: u32 = 5;

/// Characters of generated text fed to the image backend as a style hint.
const STYLE_HINT_CHARS: usize = 50;

/// Stages of one posting cycle, in firing order.
///
/// Transitions are strictly linear; a failure in any stage ends the cycle
/// with an error instead of advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Stage {
    /// Choosing an unused topic
    SelectingTopic,
    /// Generating text with bounded uniqueness retries
    GeneratingContent,
    /// Generating the best-effort image
    GeneratingImage,
    /// Delivering the post to the page
    Publishing,
    /// Appending the post record
    Recording,
    /// Terminal success
    Done,
}

/// Outcome of one pipeline cycle that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// A post was published and recorded
    Published(PostRecord),
    /// The daily quota was already spent; nothing was generated or called
    QuotaExhausted,
}

/// Orchestrates one publish cycle: select topic, generate unique content,
/// generate image, publish, record.
///
/// Stages execute strictly sequentially; each collaborator call either
/// returns a result or fails. The store, not the pipeline, carries all
/// state between cycles.
pub struct PostPipeline<G, P, S> {
    generator: Arc<G>,
    publisher: Arc<P>,
    store: Arc<S>,
    catalog: TopicCatalog,
    styles: StyleCatalog,
    daily_limit: u32,
    retry_pause: Duration,
}

impl<G, P, S> PostPipeline<G, P, S>
where
    G: ContentGenerator,
    P: Publisher,
    S: PostStore,
{
    /// Create a pipeline from configuration and collaborators.
    pub fn new(config: &BotConfig, generator: Arc<G>, publisher: Arc<P>, store: Arc<S>) -> Self {
        Self {
            generator,
            publisher,
            store,
            catalog: config.topic_catalog(),
            styles: config.style_catalog(),
            daily_limit: config.daily_limit,
            retry_pause: config.retry_pause(),
        }
    }

    /// Remaining quota for the date, read from the store.
    pub async fn remaining_quota(&self, date: NaiveDate) -> GriotResult<u32> {
        QuotaTracker::new(self.store.as_ref(), self.daily_limit)
            .remaining(date)
            .await
    }

    /// Run one cycle dated by the process-local clock.
    pub async fn run_cycle(&self) -> GriotResult<CycleOutcome> {
        self.run_cycle_on(Local::now().date_naive()).await
    }

    /// Run one cycle for an explicit calendar date.
    #[instrument(skip(self), fields(date = %today))]
    pub async fn run_cycle_on(&self, today: NaiveDate) -> GriotResult<CycleOutcome> {
        let quota = QuotaTracker::new(self.store.as_ref(), self.daily_limit);

        // Quota is enforced before any content is generated, never after.
        let used = quota.used(today).await?;
        if used >= self.daily_limit {
            info!(used, limit = self.daily_limit, "Daily quota spent, skipping cycle");
            return Ok(CycleOutcome::QuotaExhausted);
        }
        let sequence_number = used + 1;

        debug!(stage = %Stage::SelectingTopic, "Entering stage");
        let choice = TopicSelector::new(&self.catalog, self.store.as_ref())
            .pick_topic(today)
            .await?;

        debug!(stage = %Stage::GeneratingContent, topic = %choice.topic, "Entering stage");
        let message = self.generate_unique_message(&choice.topic, today).await?;

        debug!(stage = %Stage::GeneratingImage, "Entering stage");
        let image = self.generate_image(&choice.topic, &message).await;

        debug!(stage = %Stage::Publishing, "Entering stage");
        let post_id = self.publisher.publish(&message, image.as_deref()).await?;

        debug!(stage = %Stage::Recording, post_id = %post_id, "Entering stage");
        let record = PostRecord {
            date: today,
            topic: choice.topic,
            content_hash: content_hash(&message),
            message,
            sequence_number,
            external_post_id: Some(post_id.as_str().to_string()),
            timestamp: Utc::now(),
        };

        if let Err(e) = self.store.append(&record).await {
            // The external post exists but history holds no trace of it. A
            // later cycle may repeat its topic or miscount quota, and no
            // automatic correction is possible.
            error!(
                post_id = %post_id,
                error = %e,
                "Post published but not recorded; store has diverged from the page"
            );
            return Err(PipelineError::new(PipelineErrorKind::UnrecordedPublish {
                post_id: post_id.as_str().to_string(),
                reason: e.to_string(),
            })
            .into());
        }

        info!(
            stage = %Stage::Done,
            topic = %record.topic,
            seq = record.sequence_number,
            post_id = %post_id,
            "Post published and recorded"
        );
        Ok(CycleOutcome::Published(record))
    }

    /// Generate text until it is non-empty and not an exact duplicate.
    ///
    /// Empty results, backend failures, and duplicates all consume one of
    /// the bounded attempts, with a short pause between attempts. Duplicate
    /// content is a normal retry trigger, not an error.
    async fn generate_unique_message(&self, topic: &str, today: NaiveDate) -> GriotResult<String> {
        let dedup = DeduplicationEngine::new(self.store.as_ref());

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            if attempt > 1 && !self.retry_pause.is_zero() {
                tokio::time::sleep(self.retry_pause).await;
            }

            let style = self.styles.render_random(topic);
            let raw = match self.generator.generate_text(topic, &style).await {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(attempt, error = %e, "Text generation failed");
                    continue;
                }
            };

            let message = refine_message(&raw);
            if message.is_empty() {
                warn!(attempt, "Generation produced an empty message");
                continue;
            }
            if dedup.is_duplicate_message(&message, today).await? {
                debug!(attempt, "Generated text duplicates a post from today, retrying");
                continue;
            }
            return Ok(message);
        }

        Err(PipelineError::new(PipelineErrorKind::NoUniqueContent {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
        .into())
    }

    /// Best-effort image generation; failure degrades to a text-only post.
    async fn generate_image(&self, topic: &str, message: &str) -> Option<Vec<u8>> {
        let hint = style_hint(message, STYLE_HINT_CHARS);
        match self.generator.generate_image(topic, hint).await {
            Ok(bytes) if !bytes.is_empty() => Some(bytes),
            Ok(_) => {
                warn!(topic = %topic, "Image backend returned no bytes, posting text-only");
                None
            }
            Err(e) => {
                warn!(topic = %topic, error = %e, "Image generation failed, posting text-only");
                None
            }
        }
    }
}
