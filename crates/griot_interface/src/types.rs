//! Shared types for collaborator interfaces.

use serde::{Deserialize, Serialize};

/// Identifier returned by the publisher for a successful post.
///
/// Opaque to the engine; stored on the [`PostRecord`](griot_core::PostRecord)
/// for audit and divergence reporting.
///
/// # Examples
///
/// ```
/// use griot_interface::PostId;
///
/// let id = PostId::new("1234567890_42");
/// assert_eq!(id.as_str(), "1234567890_42");
/// assert_eq!(format!("{}", id), "1234567890_42");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[display("{}", _0)]
pub struct PostId(String);

impl PostId {
    /// Create a post id from the publisher's raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
