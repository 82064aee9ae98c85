//! Griot - scheduled AI page-posting bot.
//!
//! Griot generates text and image content for a social page on a timer
//! while avoiding duplicate or near-term topic-repeat posts and respecting
//! a daily post quota. The workspace separates the posting engine from its
//! external collaborators:
//!
//! - `griot_core` - data types: post records, catalogs, hashing, text refinement
//! - `griot_interface` - collaborator traits: generator, publisher, store
//! - `griot_store` - post-history backends (JSON-lines file, in-memory)
//! - `griot_bot` - the engine: dedup, quota, topic selection, pipeline, scheduler
//! - `griot_error` - foundation error types
//!
//! This facade crate re-exports the public API and carries the `griot`
//! binary. The shipped generator and publisher are offline stand-ins; real
//! API backends plug in by implementing the same traits.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use griot::{BotConfig, ConsolePublisher, OfflineGenerator, PostPipeline, MemoryStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = BotConfig::default();
//!     let pipeline = PostPipeline::new(
//!         &config,
//!         Arc::new(OfflineGenerator::new()),
//!         Arc::new(ConsolePublisher::new()),
//!         Arc::new(MemoryStore::new()),
//!     );
//!     let outcome = pipeline.run_cycle().await?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cli;
mod offline;

pub use cli::{Cli, Commands};
pub use offline::{ConsolePublisher, OfflineGenerator};

pub use griot_bot::{
    BotConfig, Credentials, CycleOutcome, DeduplicationEngine, PostPipeline, QuotaTracker,
    Scheduler, Stage, TopicChoice, TopicSelector, MAX_GENERATION_ATTEMPTS, TOPIC_WINDOW_DAYS,
};
pub use griot_core::{
    content_hash, refine_message, style_hint, PostRecord, StyleCatalog, TopicCatalog,
};
pub use griot_error::{
    ConfigError, GenerationError, GriotError, GriotErrorKind, GriotResult, PipelineError,
    PipelineErrorKind, PublishError, StoreError, StoreErrorKind,
};
pub use griot_interface::{ContentGenerator, PostId, PostStore, Publisher};
pub use griot_store::{JsonFileStore, MemoryStore};
