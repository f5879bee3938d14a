use std::io::Write;
use std::sync::Mutex;

/// Append-only diagnostics channel.
///
/// Passed explicitly into the poller and dispatcher rather than living as
/// process-global state, so tests can observe exactly what a cycle reported.
/// Appending never fails observably and must not block the caller.
pub trait DiagnosticsSink: Send + Sync {
    fn append_line(&self, line: &str);
}

/// Sink that keeps lines in memory for later inspection or draining
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// Take all accumulated lines, leaving the sink empty
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap())
    }
}

impl DiagnosticsSink for MemorySink {
    fn append_line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

/// Sink that writes timestamped lines to any writer (a log file, stderr).
/// Write errors are swallowed; diagnostics must never fail the caller.
pub struct TimestampedWriterSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> TimestampedWriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl<W: Write + Send> DiagnosticsSink for TimestampedWriterSink<W> {
    fn append_line(&self, line: &str) {
        let stamp = chrono::Local::now().format("%H:%M:%S%.3f");
        let mut writer = self.writer.lock().unwrap();
        let _ = writeln!(writer, "{} {}", stamp, line);
        let _ = writer.flush();
    }
}
