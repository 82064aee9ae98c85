//! Publishing error types.

/// Error from the publishing backend, with source location.
///
/// A publish failure abandons the current post slot without writing a
/// record, so quota is preserved for a later cycle.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Publish Error: {} at line {} in {}", message, line, file)]
pub struct PublishError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl PublishError {
    /// Create a new PublishError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use griot_error::PublishError;
    ///
    /// let err = PublishError::new("page rejected the post");
    /// assert!(format!("{}", err).contains("rejected"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
