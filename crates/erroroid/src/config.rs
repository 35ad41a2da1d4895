//! Annotator configuration.

use crate::Placeholder;
use derive_getters::Getters;
use erroroid_error::{BuilderError, ConfigError, ErroroidResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Template used when none is configured.
pub const DEFAULT_FORMAT: &str = "ERROR: [#file:#line @#func] -> #err";

/// Configuration for an [`Annotator`](crate::Annotator).
///
/// Every field is optional and falls back to its default. When an annotator is
/// built the fields are applied in declaration order: `format` first (which
/// compiles the template), then `log_emission`.
///
/// # Examples
///
/// ```
/// use erroroid::{AnnotatorConfig, DEFAULT_FORMAT};
///
/// let config = AnnotatorConfig::builder()
///     .format("[#line] #err")
///     .build()
///     .unwrap();
/// assert_eq!(config.format(), "[#line] #err");
/// assert!(*config.log_emission());
///
/// let quiet = AnnotatorConfig::default().with_log_emission(false);
/// assert_eq!(quiet.format(), DEFAULT_FORMAT);
/// assert!(!*quiet.log_emission());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[serde(deny_unknown_fields)]
#[setters(prefix = "with_")]
#[builder(
    default,
    setter(into),
    build_fn(private, name = "build_internal")
)]
pub struct AnnotatorConfig {
    /// Render template containing `#err`, `#file`, `#line` and `#func`.
    #[serde(default = "default_format")]
    format: String,

    /// Whether each annotation is also written to the sink.
    #[serde(default = "default_log_emission")]
    log_emission: bool,
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

fn default_log_emission() -> bool {
    true
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            log_emission: default_log_emission(),
        }
    }
}

impl AnnotatorConfigBuilder {
    /// Build the `AnnotatorConfig`.
    ///
    /// # Errors
    ///
    /// Returns error if the builder cannot produce a configuration.
    pub fn build(&self) -> Result<AnnotatorConfig, BuilderError> {
        self.build_internal().map_err(|e| BuilderError::new(e.to_string()))
    }
}

/// A template that will render, but probably not the way it was meant to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum FormatWarning {
    /// The template has no placeholders at all.
    #[display("format contains no placeholders")]
    NoPlaceholders,
    /// A placeholder appears more than once; only the first is substituted.
    #[display("placeholder {} appears more than once", _0)]
    Repeated(Placeholder),
}

impl AnnotatorConfig {
    /// Creates a new config builder.
    pub fn builder() -> AnnotatorConfigBuilder {
        AnnotatorConfigBuilder::default()
    }

    /// Parse a TOML document.
    ///
    /// Missing keys take their defaults, unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// Returns error if the document is not valid TOML for this config.
    pub fn from_toml_str(content: &str) -> ErroroidResult<Self> {
        let config = toml::from_str(content).map_err(|e| ConfigError::parse(e))?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ErroroidResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::read(path.display().to_string(), e))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            format = %config.format,
            log_emission = config.log_emission,
            "Loaded annotator config"
        );
        Ok(config)
    }

    /// Report template problems that do not stop rendering.
    pub fn warnings(&self) -> Vec<FormatWarning> {
        let mut found = false;
        let mut warnings = Vec::new();
        for placeholder in Placeholder::ALL {
            match self.format.matches(placeholder.token()).count() {
                0 => {}
                1 => found = true,
                _ => {
                    found = true;
                    warnings.push(FormatWarning::Repeated(placeholder));
                }
            }
        }
        if !found {
            warnings.insert(0, FormatWarning::NoPlaceholders);
        }
        warnings
    }
}
