//! Error types for the Griot posting engine.
//!
//! This crate provides the foundation error types used throughout the Griot
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use griot_error::{GriotResult, PublishError};
//!
//! fn publish() -> GriotResult<String> {
//!     Err(PublishError::new("Connection refused"))?
//! }
//!
//! match publish() {
//!     Ok(id) => println!("Posted: {}", id),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod generation;
mod pipeline;
mod publish;
mod store;

pub use config::ConfigError;
pub use error::{GriotError, GriotErrorKind, GriotResult};
pub use generation::GenerationError;
pub use pipeline::{PipelineError, PipelineErrorKind};
pub use publish::PublishError;
pub use store::{StoreError, StoreErrorKind};
