//! Post store backends for the Griot posting engine.
//!
//! Two implementations of the [`PostStore`](griot_interface::PostStore)
//! contract:
//! - [`JsonFileStore`]: durable append-only JSON-lines file, the default
//!   backend for a single-producer page bot
//! - [`MemoryStore`]: in-process store for tests and dry runs

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
