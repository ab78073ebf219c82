//! CLI presentation
//!
//! Event sinks and summary rendering for the `create` command. The console
//! sink prints human-readable progress; the JSON sink emits one NDJSON
//! event per line for CI consumption.

pub mod console;
pub mod json;

pub use console::{render_summary, ConsoleEventSink};
pub use json::{emit_report, JsonEventSink};
