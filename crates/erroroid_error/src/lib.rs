//! Error types for the Erroroid library.
//!
//! These are the errors Erroroid itself can produce while loading or building
//! configuration. Annotating an error never fails, so nothing in here is
//! returned from the annotation path.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use erroroid_error::{ConfigError, ErroroidResult};
//!
//! fn load() -> ErroroidResult<String> {
//!     Err(ConfigError::parse("expected `=` at line 1"))?
//! }
//!
//! match load() {
//!     Ok(format) => println!("Got: {}", format),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod error;

pub use builder::BuilderError;
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{ErroroidError, ErroroidErrorKind, ErroroidResult};
