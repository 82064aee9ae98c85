//! Top-level error wrapper types.

use crate::{ConfigError, GenerationError, PipelineError, PublishError, StoreError};

/// Foundation error enum for the Griot workspace.
///
/// # Examples
///
/// ```
/// use griot_error::{GriotError, PublishError};
///
/// let publish_err = PublishError::new("token expired");
/// let err: GriotError = publish_err.into();
/// assert!(format!("{}", err).contains("Publish Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GriotErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Content generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Publishing error
    #[from(PublishError)]
    Publish(PublishError),
    /// Post store error
    #[from(StoreError)]
    Store(StoreError),
    /// Pipeline failure
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Griot error with kind discrimination.
///
/// # Examples
///
/// ```
/// use griot_error::{GriotResult, ConfigError};
///
/// fn might_fail() -> GriotResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Griot Error: {}", _0)]
pub struct GriotError(Box<GriotErrorKind>);

impl GriotError {
    /// Create a new error from a kind.
    pub fn new(kind: GriotErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GriotErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to GriotErrorKind
impl<T> From<T> for GriotError
where
    T: Into<GriotErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Griot operations.
///
/// # Examples
///
/// ```
/// use griot_error::{GriotResult, StoreError};
///
/// fn append() -> GriotResult<()> {
///     Err(StoreError::unavailable("sheet offline"))?
/// }
/// ```
pub type GriotResult<T> = std::result::Result<T, GriotError>;
