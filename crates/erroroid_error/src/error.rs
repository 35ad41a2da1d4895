//! Top-level error wrapper types.

use crate::{BuilderError, ConfigError};

/// Every error condition the library can report.
///
/// # Examples
///
/// ```
/// use erroroid_error::{ConfigError, ErroroidError};
///
/// let err: ErroroidError = ConfigError::parse("unknown field `fromat`").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ErroroidErrorKind {
    /// Configuration loading error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Configuration builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Erroroid error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Erroroid Error: {}", _0)]
pub struct ErroroidError(Box<ErroroidErrorKind>);

impl ErroroidError {
    /// Create a new error from a kind.
    pub fn new(kind: ErroroidErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ErroroidErrorKind {
        &self.0
    }
}

impl<T> From<T> for ErroroidError
where
    T: Into<ErroroidErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Erroroid operations.
pub type ErroroidResult<T> = std::result::Result<T, ErroroidError>;
