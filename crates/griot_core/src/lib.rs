//! Core data types for the Griot posting engine.
//!
//! This crate provides the foundation data types shared across the Griot
//! workspace: the durable [`PostRecord`], the [`TopicCatalog`] and
//! [`StyleCatalog`] that drive content selection, content hashing, and the
//! pure text-refinement pass applied to generated messages.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod hash;
mod record;
mod text;
mod topic;

pub use hash::content_hash;
pub use record::{PostRecord, PostRecordBuilder};
pub use text::{refine_message, style_hint};
pub use topic::{StyleCatalog, TopicCatalog};
