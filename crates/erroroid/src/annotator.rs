//! The annotator and the errors it produces.

use crate::{
    AnnotatorConfig, Arg, CallSite, CompiledFormat, ErrorValue, IntoErrorValue, LogSink,
    Placeholder, StderrSink,
};
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// An error rendered with the call site it was annotated at.
///
/// `Display` prints the rendered template and nothing else. The original value
/// stays available, and when it was an error object it is also the `source()`.
#[derive(Debug, derive_more::Display)]
#[display("{}", message)]
pub struct AnnotatedError {
    message: String,
    value: ErrorValue,
    call_site: CallSite,
}

impl AnnotatedError {
    /// The rendered template.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The value that was annotated.
    pub fn value(&self) -> &ErrorValue {
        &self.value
    }

    /// Where the annotation was made.
    pub fn call_site(&self) -> &CallSite {
        &self.call_site
    }

    /// Take back the annotated value.
    pub fn into_value(self) -> ErrorValue {
        self.value
    }
}

impl StdError for AnnotatedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.value
            .as_error()
            .map(|error| error as &(dyn StdError + 'static))
    }
}

/// Renders errors together with the file, line and function they came from.
///
/// Build one per format and reuse it; annotating only reads the annotator, so a
/// shared reference can be used from many threads. Annotate with the
/// [`annotate!`](crate::annotate) macro, which captures the call site where it
/// is written.
///
/// # Examples
///
/// ```
/// use erroroid::{annotate, AnnotatedError, Annotator, AnnotatorConfig};
///
/// fn open_database(annotator: &Annotator) -> Option<AnnotatedError> {
///     annotate!(annotator, "connection refused")
/// }
///
/// fn main() {
///     let annotator = Annotator::new(
///         AnnotatorConfig::builder()
///             .format("#func failed: #err")
///             .log_emission(false)
///             .build()
///             .unwrap(),
///     );
///
///     let err = open_database(&annotator).unwrap();
///     assert_eq!(err.to_string(), "open_database failed: connection refused");
///
///     let nothing: Option<&str> = None;
///     assert!(annotate!(annotator, nothing).is_none());
/// }
/// ```
pub struct Annotator {
    config: AnnotatorConfig,
    compiled: CompiledFormat,
    sink: Arc<dyn LogSink>,
}

impl Annotator {
    /// Create an annotator that logs to standard error.
    pub fn new(config: AnnotatorConfig) -> Self {
        Self::with_sink(config, Arc::new(StderrSink))
    }

    /// Create an annotator that logs to the given sink.
    pub fn with_sink(config: AnnotatorConfig, sink: Arc<dyn LogSink>) -> Self {
        let compiled = CompiledFormat::compile(config.format().as_str());
        for warning in config.warnings() {
            tracing::warn!(format = %config.format(), %warning, "Suspicious annotator format");
        }
        tracing::debug!(
            format = %config.format(),
            template = %compiled.template(),
            log_emission = *config.log_emission(),
            "Creating new Annotator"
        );
        Self {
            config,
            compiled,
            sink,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    /// The compiled form of the configured template.
    pub fn compiled(&self) -> &CompiledFormat {
        &self.compiled
    }

    /// Whether annotations are written to the sink.
    pub fn log_emission(&self) -> bool {
        *self.config.log_emission()
    }

    /// Replace the template and recompile it.
    pub fn set_format(&mut self, format: impl Into<String>) {
        self.config = std::mem::take(&mut self.config).with_format(format.into());
        self.compiled = CompiledFormat::compile(self.config.format().as_str());
        for warning in self.config.warnings() {
            tracing::warn!(format = %self.config.format(), %warning, "Suspicious annotator format");
        }
        tracing::debug!(template = %self.compiled.template(), "Reconfigured annotator format");
    }

    /// Turn writing to the sink on or off.
    pub fn set_log_emission(&mut self, enabled: bool) {
        self.config = std::mem::take(&mut self.config).with_log_emission(enabled);
        tracing::debug!(log_emission = enabled, "Reconfigured annotator log emission");
    }

    /// Replace the sink.
    pub fn set_sink(&mut self, sink: Arc<dyn LogSink>) {
        self.sink = sink;
    }

    /// Annotate `value` as coming from the call site produced by `site`.
    ///
    /// Returns `None` without calling `site`, rendering or logging when `value`
    /// is absent. Prefer [`annotate!`](crate::annotate), which supplies the
    /// caller's site.
    pub fn annotate_at<V, F>(&self, value: V, site: F) -> Option<AnnotatedError>
    where
        V: IntoErrorValue,
        F: FnOnce() -> CallSite,
    {
        let value = value.into_error_value()?;
        let call_site = site();
        let message = self.render(&value, &call_site);

        if self.log_emission() {
            self.sink.write_line(&message, &call_site);
        }

        Some(AnnotatedError {
            message,
            value,
            call_site,
        })
    }

    /// Render the template for a value and call site without logging.
    pub fn render(&self, value: &ErrorValue, call_site: &CallSite) -> String {
        let line = i64::from(*call_site.line());
        let args: Vec<Arg<'_>> = self
            .compiled
            .ordering()
            .iter()
            .map(|position| match position.placeholder() {
                Placeholder::Error => Arg::Display(value),
                Placeholder::File => Arg::Str(call_site.file()),
                Placeholder::Function => Arg::Str(call_site.function()),
                Placeholder::Line => Arg::Int(line),
            })
            .collect();
        self.compiled.render(&args)
    }
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new(AnnotatorConfig::default())
    }
}

impl fmt::Debug for Annotator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Annotator")
            .field("config", &self.config)
            .field("template", &self.compiled.template())
            .finish_non_exhaustive()
    }
}

/// Annotate a value with the call site this macro is written at.
///
/// Expands to [`Annotator::annotate_at`] with a [`call_site!`](crate::call_site)
/// captured here, and evaluates to `Option<AnnotatedError>`: `None` when the
/// value is `None`.
///
/// # Examples
///
/// ```
/// use erroroid::{annotate, Annotator, AnnotatorConfig};
///
/// let annotator = Annotator::new(AnnotatorConfig::default().with_log_emission(false));
///
/// let result: Result<u8, std::io::Error> = Err(std::io::Error::other("timed out"));
/// let err = annotate!(annotator, result.err()).unwrap();
/// assert!(err.to_string().ends_with("-> timed out"));
/// ```
#[macro_export]
macro_rules! annotate {
    ($annotator:expr, $value:expr $(,)?) => {
        $annotator.annotate_at($value, || $crate::call_site!())
    };
}
