//! The value being annotated.

use std::error::Error as StdError;
use std::fmt;

/// Boxed error accepted by [`ErrorValue::Error`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Either a plain message or an error object.
///
/// # Examples
///
/// ```
/// use erroroid::ErrorValue;
///
/// let message = ErrorValue::from("disk full");
/// assert_eq!(message.to_string(), "disk full");
///
/// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
/// let error = ErrorValue::from_error(io);
/// assert_eq!(error.to_string(), "no such file");
/// ```
#[derive(Debug)]
pub enum ErrorValue {
    /// A message string.
    Message(String),
    /// An error object, rendered through its `Display` impl.
    Error(BoxError),
}

impl ErrorValue {
    /// Wrap any error.
    pub fn from_error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        ErrorValue::Error(Box::new(error))
    }

    /// The wrapped error, if this is not a plain message.
    pub fn as_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            ErrorValue::Message(_) => None,
            ErrorValue::Error(error) => Some(error.as_ref()),
        }
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorValue::Message(message) => f.write_str(message),
            ErrorValue::Error(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl From<&str> for ErrorValue {
    fn from(message: &str) -> Self {
        ErrorValue::Message(message.to_string())
    }
}

impl From<String> for ErrorValue {
    fn from(message: String) -> Self {
        ErrorValue::Message(message)
    }
}

impl From<BoxError> for ErrorValue {
    fn from(error: BoxError) -> Self {
        ErrorValue::Error(error)
    }
}

impl From<std::io::Error> for ErrorValue {
    fn from(error: std::io::Error) -> Self {
        ErrorValue::from_error(error)
    }
}

/// Anything that can be annotated, or nothing at all.
///
/// `None` means there is no error; annotating it is a no-op. This lets a call
/// site wrap `result.err()` without branching.
pub trait IntoErrorValue {
    /// Convert into a value, or `None` when there is nothing to annotate.
    fn into_error_value(self) -> Option<ErrorValue>;
}

impl IntoErrorValue for ErrorValue {
    fn into_error_value(self) -> Option<ErrorValue> {
        Some(self)
    }
}

impl IntoErrorValue for &str {
    fn into_error_value(self) -> Option<ErrorValue> {
        Some(self.into())
    }
}

impl IntoErrorValue for String {
    fn into_error_value(self) -> Option<ErrorValue> {
        Some(self.into())
    }
}

impl IntoErrorValue for BoxError {
    fn into_error_value(self) -> Option<ErrorValue> {
        Some(self.into())
    }
}

impl IntoErrorValue for std::io::Error {
    fn into_error_value(self) -> Option<ErrorValue> {
        Some(self.into())
    }
}

impl<T> IntoErrorValue for Option<T>
where
    T: IntoErrorValue,
{
    fn into_error_value(self) -> Option<ErrorValue> {
        self.and_then(IntoErrorValue::into_error_value)
    }
}
