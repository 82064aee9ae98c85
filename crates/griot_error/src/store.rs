//! Post store error types.

/// Kinds of post store errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// The backing medium cannot be reached or written
    #[display("Store unavailable: {}", _0)]
    Unavailable(String),
    /// Failed to read from the backing medium
    #[display("Failed to read store: {}", _0)]
    Read(String),
    /// A persisted record could not be decoded
    #[display("Corrupt record: {}", _0)]
    Corrupt(String),
    /// Failed to encode a record for persistence
    #[display("Failed to encode record: {}", _0)]
    Encode(String),
}

/// Post store error with location tracking.
///
/// # Examples
///
/// ```
/// use griot_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::Unavailable("disk full".to_string()));
/// assert!(format!("{}", err).contains("unavailable"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new store error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Convenience constructor for [`StoreErrorKind::Unavailable`].
    #[track_caller]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Unavailable(message.into()))
    }
}
