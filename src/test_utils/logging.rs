//! Test logging infrastructure with structured log capture.

use std::collections::VecDeque;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Instant;

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Global log storage for test assertions.
static LOG_STORAGE: OnceLock<Arc<Mutex<LogStorage>>> = OnceLock::new();

/// Storage for captured log entries.
#[derive(Default)]
pub struct LogStorage {
    entries: VecDeque<LogEntry>,
    max_entries: usize,
}

impl LogStorage {
    #[must_use]
    pub const fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn contains_message(&self, message: &str) -> bool {
        self.entries.iter().any(|e| e.message.contains(message))
    }
}

/// A captured log entry.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Get or initialize the global log storage.
pub fn get_log_storage() -> Arc<Mutex<LogStorage>> {
    LOG_STORAGE
        .get_or_init(|| Arc::new(Mutex::new(LogStorage::new(1000))))
        .clone()
}

/// Get all captured log entries.
#[must_use]
pub fn get_logs() -> Vec<LogEntry> {
    get_log_storage()
        .lock()
        .map(|storage| storage.entries.iter().cloned().collect())
        .unwrap_or_default()
}

/// Check if logs contain a message.
#[must_use]
pub fn logs_contain(message: &str) -> bool {
    get_log_storage()
        .lock()
        .is_ok_and(|storage| storage.contains_message(message))
}

/// Format logs for display on test failure.
#[must_use]
pub fn format_logs_for_display() -> String {
    let logs = get_logs();
    if logs.is_empty() {
        return String::from("No logs captured");
    }

    let mut output = String::new();
    let _ = writeln!(output, "Captured {} log entries:", logs.len());
    for entry in logs {
        let _ = writeln!(output, "[{}] {}: {}", entry.level, entry.target, entry.message);
        for (key, value) in &entry.fields {
            let _ = writeln!(output, "    {key} = {value}");
        }
    }
    output
}

/// Custom layer for capturing logs during tests.
pub struct TestLogLayer {
    storage: Arc<Mutex<LogStorage>>,
}

impl TestLogLayer {
    pub const fn new(storage: Arc<Mutex<LogStorage>>) -> Self {
        Self { storage }
    }
}

struct MessageVisitor<'a> {
    message: &'a mut String,
    fields: &'a mut Vec<(String, String)>,
}

impl tracing::field::Visit for MessageVisitor<'_> {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            *self.message = value.to_string();
        } else {
            self.fields.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let value = format!("{value:?}");
        if field.name() == "message" {
            *self.message = value;
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

impl<S> tracing_subscriber::Layer<S> for TestLogLayer
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let metadata = event.metadata();
        let mut message = String::new();
        let mut fields = Vec::new();
        event.record(&mut MessageVisitor {
            message: &mut message,
            fields: &mut fields,
        });

        let entry = LogEntry {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message,
            fields,
        };
        if let Ok(mut storage) = self.storage.lock() {
            storage.push(entry);
        }
    }
}

/// Install the capturing subscriber and clear previous entries.
///
/// The subscriber is global; installing it twice is a no-op.
#[must_use]
pub fn init_test_logging(level: &str) -> TestLoggingGuard {
    let storage = get_log_storage();
    if let Ok(mut s) = storage.lock() {
        s.clear();
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(TestLogLayer::new(storage));
    let _ = tracing::subscriber::set_global_default(subscriber);

    TestLoggingGuard {
        start_time: Instant::now(),
    }
}

/// Prints the captured logs if the test panics.
pub struct TestLoggingGuard {
    start_time: Instant,
}

impl Drop for TestLoggingGuard {
    fn drop(&mut self) {
        if std::thread::panicking() {
            eprintln!("Duration: {:?}", self.start_time.elapsed());
            eprintln!("{}", format_logs_for_display());
        }
    }
}
