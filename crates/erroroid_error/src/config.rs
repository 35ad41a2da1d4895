//! Configuration loading errors.

/// Why a configuration could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigErrorKind {
    /// The file could not be read.
    #[display("Failed to read config file {}: {}", path, reason)]
    Read {
        /// Path that was read
        path: String,
        /// I/O failure description
        reason: String,
    },

    /// The document is not valid TOML for an annotator config.
    #[display("Failed to parse config: {}", _0)]
    Parse(String),
}

/// Configuration error with the location it was raised at.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    line: u32,
    file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// A config file could not be read.
    ///
    /// # Examples
    ///
    /// ```
    /// use erroroid_error::{ConfigError, ConfigErrorKind};
    ///
    /// let err = ConfigError::read("erroroid.toml", "permission denied");
    /// assert!(matches!(err.kind(), ConfigErrorKind::Read { .. }));
    /// assert!(err.to_string().contains("erroroid.toml: permission denied"));
    /// ```
    #[track_caller]
    pub fn read(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::new(ConfigErrorKind::Read {
            path: path.into(),
            reason: reason.to_string(),
        })
    }

    /// A config document could not be parsed.
    #[track_caller]
    pub fn parse(reason: impl ToString) -> Self {
        Self::new(ConfigErrorKind::Parse(reason.to_string()))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
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
