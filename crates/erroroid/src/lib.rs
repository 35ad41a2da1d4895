//! Error annotation with call-site context.
//!
//! An [`Annotator`] turns an error or message into a diagnostic that names the
//! file, line and function it was raised from, using a small template:
//!
//! ```text
//! ERROR: [#file:#line @#func] -> #err
//! ```
//!
//! The four placeholders may appear in any order. Each annotation can also be
//! written to a [`LogSink`].
//!
//! # Examples
//!
//! ```
//! use erroroid::{annotate, AnnotatedError, Annotator, AnnotatorConfig, ErrorValue, MemorySink};
//! use std::error::Error;
//! use std::sync::Arc;
//!
//! fn parse_port(annotator: &Annotator, raw: &str) -> Result<u16, AnnotatedError> {
//!     raw.parse::<u16>()
//!         .map_err(|e| annotate!(annotator, ErrorValue::from_error(e)).unwrap())
//! }
//!
//! fn main() {
//!     let sink = MemorySink::new();
//!     let annotator = Annotator::with_sink(AnnotatorConfig::default(), Arc::new(sink.clone()));
//!
//!     let err = parse_port(&annotator, "http").unwrap_err();
//!     assert!(err.to_string().contains("@parse_port] -> invalid digit"));
//!     assert_eq!(sink.contents(), format!("{}\n", err));
//!
//!     let source = err.source().unwrap();
//!     assert!(source.downcast_ref::<std::num::ParseIntError>().is_some());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod annotator;
mod call_site;
mod config;
mod format;
mod logging;
mod placeholder;
mod sink;
mod value;

pub use annotator::{AnnotatedError, Annotator};
pub use call_site::CallSite;
pub use config::{AnnotatorConfig, AnnotatorConfigBuilder, DEFAULT_FORMAT, FormatWarning};
pub use format::{Arg, CompiledFormat, TokenPosition};
pub use logging::init_logging;
pub use placeholder::{Placeholder, SlotKind};
pub use sink::{LogSink, MemorySink, StderrSink, TracingSink};
pub use value::{BoxError, ErrorValue, IntoErrorValue};
pub use erroroid_error::{
    BuilderError, ConfigError, ConfigErrorKind, ErroroidError, ErroroidErrorKind, ErroroidResult,
};
