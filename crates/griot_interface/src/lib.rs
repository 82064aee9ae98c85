//! Collaborator trait definitions for the Griot posting engine.
//!
//! The engine treats its three external collaborators as opaque capability
//! seams: a [`ContentGenerator`] produces text and images, a [`Publisher`]
//! delivers a post to the page, and a [`PostStore`] durably records post
//! history. Concrete backends (HTTP APIs, spreadsheets, local files) live
//! behind these traits; the engine never sees their wire formats.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{ContentGenerator, PostStore, Publisher};
pub use types::PostId;
