//! Tests for log sinks.

use erroroid::{CallSite, LogSink, MemorySink, StderrSink, TracingSink};
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn site() -> CallSite {
    CallSite::new("/a.rs", 3, "main")
}

#[test]
fn memory_sink_appends_newlines() {
    let sink = MemorySink::new();
    assert!(sink.is_empty());

    sink.write_line("one", &site());
    sink.write_line("two", &site());
    assert_eq!(sink.contents(), "one\ntwo\n");
    assert_eq!(sink.lines(), vec!["one", "two"]);
}

#[test]
fn memory_sink_clones_share_a_buffer() {
    let sink = MemorySink::new();
    let clone = sink.clone();
    clone.write_line("shared", &site());
    assert_eq!(sink.contents(), "shared\n");

    sink.clear();
    assert!(clone.is_empty());
}

#[test]
fn stderr_sink_writes_without_panicking() {
    StderrSink.write_line("stderr sink test line", &site());
}

#[test]
fn tracing_sink_emits_error_event() {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        TracingSink.write_line("ERROR: [/a.rs:3 @main] -> boom", &site());
    });

    let output = String::from_utf8(buffer.0.lock().clone()).unwrap();
    assert!(output.contains("ERROR"));
    assert!(output.contains("erroroid"));
    assert!(output.contains("ERROR: [/a.rs:3 @main] -> boom"));
}

#[test]
fn tracing_sink_records_call_site_fields() {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let call_site = CallSite::new("/srv/handlers.rs", 27, "Handler");
    tracing::subscriber::with_default(subscriber, || {
        TracingSink.write_line("request failed", &call_site);
    });

    let output = String::from_utf8(buffer.0.lock().clone()).unwrap();
    assert!(output.contains("call_site=/srv/handlers.rs:27 @Handler"));
    assert!(output.contains("file=/srv/handlers.rs"));
    assert!(output.contains("line=27"));
    assert!(output.contains("function=Handler"));
}
