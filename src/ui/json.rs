//! NDJSON event stream for CI consumption

use std::io::{self, Write};

use chrono::Utc;
use serde_json::json;

use crate::application::BuildReport;
use crate::domain::ports::{BuildEvent, BuildEventSink};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}

/// Event sink that emits one JSON object per event to stdout
pub struct JsonEventSink;

impl JsonEventSink {
    fn payload(event: &BuildEvent) -> serde_json::Value {
        match event {
            BuildEvent::Started {
                target,
                package_count,
            } => json!({
                "event": "started",
                "target": target.display().to_string(),
                "packages": package_count,
            }),
            BuildEvent::ManifestFiltered { retained, skipped } => json!({
                "event": "filtered",
                "retained": retained,
                "skipped": skipped,
            }),
            BuildEvent::PlanResolved { order } => json!({
                "event": "plan",
                "order": order,
            }),
            BuildEvent::ProvisionFinished { root, reused } => json!({
                "event": "environment",
                "root": root.display().to_string(),
                "reused": reused,
            }),
            BuildEvent::CloneStarted { package } => json!({
                "event": "clone_started",
                "package": package,
            }),
            BuildEvent::CloneFinished { package, reused } => json!({
                "event": "clone_finished",
                "package": package,
                "reused": reused,
            }),
            BuildEvent::CloneFailed { package, error } => json!({
                "event": "clone_failed",
                "package": package,
                "error": error,
            }),
            BuildEvent::ExtrasInstalled { count } => json!({
                "event": "extras_installed",
                "count": count,
            }),
            BuildEvent::InstallStarted {
                index,
                total,
                package,
            } => json!({
                "event": "install_started",
                "index": index,
                "total": total,
                "package": package,
            }),
            BuildEvent::InstallFinished { index, package } => json!({
                "event": "install_finished",
                "index": index,
                "package": package,
            }),
            BuildEvent::InstallSkipped {
                package,
                failed_dependency,
            } => json!({
                "event": "install_skipped",
                "package": package,
                "failed_dependency": failed_dependency,
            }),
            BuildEvent::InstallFailed {
                index,
                package,
                error,
            } => json!({
                "event": "install_failed",
                "index": index,
                "package": package,
                "error": error,
            }),
            BuildEvent::Completed {
                installed_count,
                skipped_count,
                failed_count,
            } => json!({
                "event": "completed",
                "installed": installed_count,
                "skipped": skipped_count,
                "failed": failed_count,
            }),
        }
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        let mut payload = Self::payload(&event);
        if let Some(object) = payload.as_object_mut() {
            object.insert("time".to_string(), json!(Utc::now().to_rfc3339()));
        }
        let _ = emit(payload);
    }
}

/// Final report object, emitted after the event stream.
pub fn emit_report(report: &BuildReport) -> io::Result<()> {
    emit(json!({
        "event": "report",
        "status": report.status().to_string(),
        "started_at": report.started_at.to_rfc3339(),
        "elapsed_seconds": report.elapsed.as_secs_f64(),
        "installed": report.installed,
        "skipped": report.skipped.iter().map(|(name, dep)| json!({
            "package": name,
            "failed_dependency": dep,
        })).collect::<Vec<_>>(),
        "failed": report.failed.iter().map(|(name, error)| json!({
            "package": name,
            "error": error,
        })).collect::<Vec<_>>(),
        "filtered": report.filtered.iter().map(|(name, reason)| json!({
            "package": name,
            "reason": reason.to_string(),
        })).collect::<Vec<_>>(),
        "errors": report.errors,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn write_event_is_one_line() {
        let mut buf = Vec::new();
        write_event(&mut buf, &json!({"event": "started", "packages": 11})).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("\"packages\":11"));
    }

    #[test]
    fn payload_names_every_event() {
        let payload = JsonEventSink::payload(&BuildEvent::Started {
            target: PathBuf::from("/tmp/env"),
            package_count: 3,
        });
        assert_eq!(payload["event"], "started");

        let payload = JsonEventSink::payload(&BuildEvent::InstallSkipped {
            package: "ch-util".to_string(),
            failed_dependency: "chimedb".to_string(),
        });
        assert_eq!(payload["event"], "install_skipped");
        assert_eq!(payload["failed_dependency"], "chimedb");
    }

    #[test]
    fn report_payload_includes_status() {
        let report = BuildReport::new();
        // serialization smoke check through the public emitters
        let payload = json!({
            "status": report.status().to_string(),
        });
        assert_eq!(payload["status"], "success");
    }
}
