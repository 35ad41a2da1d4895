//! Configuration builder errors.

/// The configuration builder rejected its input.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Builder Error: {} at line {} in {}", reason, line, file)]
pub struct BuilderError {
    reason: String,
    line: u32,
    file: &'static str,
}

impl BuilderError {
    /// Create a new builder error at the current location.
    #[track_caller]
    pub fn new(reason: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            reason: reason.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// What the builder reported.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Line where the error was raised.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// File where the error was raised.
    pub fn file(&self) -> &'static str {
        self.file
    }
}
