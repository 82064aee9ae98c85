//! Pipeline error types.

/// Kinds of pipeline failures.
///
/// These are terminal outcomes of a single posting cycle, distinct from the
/// collaborator errors that may have caused them.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Every generation attempt produced empty, failed, or duplicate text.
    ///
    /// The post slot is skipped for this cycle; no quota is consumed.
    #[display("No unique content after {} attempts", attempts)]
    NoUniqueContent {
        /// Number of generation attempts made before giving up
        attempts: u32,
    },
    /// The external post was published but could not be recorded.
    ///
    /// The external post exists while the store holds no trace of it, so a
    /// later cycle may repeat its topic or miscount quota. This cannot be
    /// auto-corrected and must be surfaced loudly.
    #[display("Published post {} is unrecorded: {}", post_id, reason)]
    UnrecordedPublish {
        /// Identifier the publisher returned for the orphaned post
        post_id: String,
        /// Why the record could not be appended
        reason: String,
    },
}

/// Pipeline error with location tracking.
///
/// # Examples
///
/// ```
/// use griot_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::NoUniqueContent { attempts: 5 });
/// assert!(format!("{}", err).contains("5 attempts"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The kind of error that occurred
    pub kind: PipelineErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new pipeline error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
