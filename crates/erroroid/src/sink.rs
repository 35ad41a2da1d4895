//! Destinations for rendered annotations.

use crate::CallSite;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Receives a copy of each rendered annotation when log emission is enabled.
///
/// Implementations append the trailing newline themselves and serialise
/// concurrent writes however their destination requires. The call site the
/// line was rendered from is passed alongside for sinks that record structure.
pub trait LogSink: Send + Sync {
    /// Write one rendered annotation as a line.
    fn write_line(&self, line: &str, call_site: &CallSite);
}

/// Writes each line to standard error. This is the default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write_line(&self, line: &str, _call_site: &CallSite) {
        let mut stderr = std::io::stderr().lock();
        if let Err(e) = writeln!(stderr, "{}", line) {
            tracing::warn!(error = %e, "Failed to write annotation to stderr");
        }
    }
}

/// Emits each line as a `tracing` error event with target `erroroid`.
///
/// The event carries the call site as `call_site`, plus its parts as
/// `file`, `line` and `function`.
///
/// Output then goes wherever the installed subscriber sends it; see
/// [`init_logging`](crate::init_logging).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write_line(&self, rendered: &str, call_site: &CallSite) {
        tracing::error!(
            target: "erroroid",
            call_site = %call_site,
            file = %call_site.file(),
            line = *call_site.line(),
            function = %call_site.function(),
            "{}",
            rendered
        );
    }
}

/// Collects lines in memory. Clones share the same buffer.
///
/// # Examples
///
/// ```
/// use erroroid::{CallSite, LogSink, MemorySink};
///
/// let site = CallSite::new("/srv/app.rs", 3, "main");
/// let sink = MemorySink::new();
/// sink.write_line("first", &site);
/// sink.write_line("second", &site);
/// assert_eq!(sink.contents(), "first\nsecond\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Written lines, without their newlines.
    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(str::to_string).collect()
    }

    /// Discard everything written so far.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    /// Check if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str, _call_site: &CallSite) {
        let mut buffer = self.buffer.lock();
        buffer.push_str(line);
        buffer.push('\n');
    }
}
