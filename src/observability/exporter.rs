//! File-based OpenTelemetry span export.
//!
//! Spans are appended to a log file as one compact JSON object per line. When
//! the file grows past its size limit it is renamed to `<name>.old`, replacing
//! any previous backup, and a fresh file is started.

use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::Value as JsonValue;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Size at which the span log is rotated (4 MB).
pub const MAX_LOG_BYTES: u64 = 4 * 1024 * 1024;

/// Append-only line log with a single `.old` backup.
pub struct SpanLog {
    path: PathBuf,
    max_bytes: u64,
    file: Mutex<Option<File>>,
}

impl SpanLog {
    /// Log at `path` rotating at [`MAX_LOG_BYTES`]. Nothing is opened until
    /// the first write.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limit(path, MAX_LOG_BYTES)
    }

    #[must_use]
    pub const fn with_limit(path: PathBuf, max_bytes: u64) -> Self {
        Self {
            path,
            max_bytes,
            file: Mutex::new(None),
        }
    }

    /// Path of the rotated backup.
    #[must_use]
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".old");
        self.path.with_file_name(name)
    }

    /// Appends `line` and a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing the file.
    pub fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|e| std::io::Error::other(format!("span log lock poisoned: {e}")))?;

        if fs::metadata(&self.path).is_ok_and(|m| m.len() >= self.max_bytes) {
            *file = None;
            fs::rename(&self.path, self.backup_path())?;
        }

        if file.is_none() {
            *file = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(handle) = file.as_mut() else {
            return Err(std::io::Error::other("span log not open"));
        };

        writeln!(handle, "{line}")?;
        handle.flush()
    }
}

impl std::fmt::Debug for SpanLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanLog")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

fn unix_nanos(time: SystemTime) -> u128 {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos()
}

fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::from(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => JsonValue::from(*f),
        Value::String(s) => JsonValue::from(s.as_str()),
        Value::Array(_) => JsonValue::from(value.to_string()),
    }
}

fn attributes(pairs: &[KeyValue]) -> JsonValue {
    pairs
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect::<serde_json::Map<_, _>>()
        .into()
}

/// One span as a flat JSON record.
fn span_record(span: &SpanData, service: &str) -> JsonValue {
    let parent = (span.parent_span_id != SpanId::INVALID).then(|| format!("{:016x}", span.parent_span_id));
    let (status, message) = match &span.status {
        Status::Unset => ("unset", String::new()),
        Status::Ok => ("ok", String::new()),
        Status::Error { description } => ("error", description.to_string()),
    };
    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| {
            serde_json::json!({
                "time_unix_nano": unix_nanos(event.timestamp).to_string(),
                "name": event.name,
                "attributes": attributes(&event.attributes),
            })
        })
        .collect();

    serde_json::json!({
        "service": service,
        "trace_id": format!("{:032x}", span.span_context.trace_id()),
        "span_id": format!("{:016x}", span.span_context.span_id()),
        "parent_span_id": parent,
        "name": span.name,
        "start_unix_nano": unix_nanos(span.start_time).to_string(),
        "duration_us": span.end_time.duration_since(span.start_time).unwrap_or(Duration::ZERO).as_micros(),
        "attributes": attributes(&span.attributes),
        "events": events,
        "status": status,
        "status_message": message,
    })
}

/// Span exporter writing JSON lines to a [`SpanLog`].
struct JsonLinesExporter {
    log: SpanLog,
    service: String,
    is_shutdown: AtomicBool,
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from("exporter is shut down"))));
        }

        let result = batch
            .iter()
            .try_for_each(|span| self.log.write_line(&span_record(span, &self.service).to_string()))
            .map_err(|e| TraceError::from(e.to_string()));

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for JsonLinesExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesExporter")
            .field("log", &self.log)
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}

/// Tracer provider exporting every finished span to `path` immediately.
#[must_use]
pub fn tracer_provider(path: &Path, service: &str) -> TracerProvider {
    let resource = Resource::new(vec![KeyValue::new("service.name", service.to_string())]);
    let exporter = JsonLinesExporter {
        log: SpanLog::new(path.to_path_buf()),
        service: service.to_string(),
        is_shutdown: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_rotates_to_a_single_backup() {
        let dir = tempfile::tempdir().unwrap();
        let log = SpanLog::with_limit(dir.path().join("spans.jsonl"), 16);

        log.write_line("0123456789abcdef").unwrap();
        log.write_line("second").unwrap();
        log.write_line("third").unwrap();

        let current = fs::read_to_string(dir.path().join("spans.jsonl")).unwrap();
        let backup = fs::read_to_string(log.backup_path()).unwrap();
        assert_eq!(current, "second\nthird\n");
        assert_eq!(backup, "0123456789abcdef\n");
    }

    #[test]
    fn backup_sits_next_to_the_log() {
        let log = SpanLog::new(PathBuf::from("/data/inkpane-spans.jsonl"));
        assert_eq!(log.backup_path(), PathBuf::from("/data/inkpane-spans.jsonl.old"));
    }

    #[test]
    fn attributes_flatten_to_an_object() {
        let json = attributes(&[KeyValue::new("post_id", 3_i64), KeyValue::new("key", "posts")]);
        assert_eq!(json, serde_json::json!({ "post_id": 3, "key": "posts" }));
    }

    #[test]
    fn write_fails_for_missing_directory() {
        let log = SpanLog::new(PathBuf::from("/definitely/not/here/spans.jsonl"));
        assert!(log.write_line("x").is_err());
    }
}
