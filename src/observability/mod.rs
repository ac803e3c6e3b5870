//! OpenTelemetry-based observability with file-based span export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → JSON lines file
//! ```
//!
//! Spans are written to `~/.local/share/zellij/inkpane/inkpane-spans.jsonl`
//! (`/host/...` inside the sandbox), one JSON object per line, with a single
//! `.old` backup kept on rotation.
//!
//! The filter comes from the `trace_level` plugin option and defaults to
//! `info`, so the `debug` spans around event handling, filtering and worker
//! messages are only recorded when asked for.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: Span log, JSON record format and tracer provider

pub mod exporter;
mod init;

pub use init::init_tracing;
