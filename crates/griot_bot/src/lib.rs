//! Posting orchestration and deduplication engine.
//!
//! The engine decides *whether* to post (daily quota), *what topic* to use
//! (shuffle-and-scan selection against a 2-day repeat window), *how many
//! attempts* to make at generating unique content (bounded retries against
//! exact-hash dedup), and *when* a post fires (external trigger or a
//! long-lived time-of-day schedule). Everything it knows about past posts
//! comes from the [`PostStore`](griot_interface::PostStore), so independent
//! invocations sharing a store resume correctly across restarts.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod dedup;
mod pipeline;
mod quota;
mod scheduler;
mod topics;

pub use config::{BotConfig, Credentials};
pub use dedup::{DeduplicationEngine, TOPIC_WINDOW_DAYS};
pub use pipeline::{CycleOutcome, PostPipeline, Stage, MAX_GENERATION_ATTEMPTS};
pub use quota::QuotaTracker;
pub use scheduler::Scheduler;
pub use topics::{TopicChoice, TopicSelector};
