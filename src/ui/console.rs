//! Console event sink and summary rendering

use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;
use unicode_width::UnicodeWidthStr;

use crate::application::{BuildReport, BuildStatus};
use crate::domain::ports::{BuildEvent, BuildEventSink};

/// Environment variable disabling colored output (used by tests)
pub const NO_COLOR_VAR: &str = "STACKENV_NO_COLOR";

fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
        && std::env::var_os(NO_COLOR_VAR).is_none()
        && std::io::stdout().is_terminal()
}

/// Progress display for interactive terminals
pub struct ConsoleEventSink {
    color: bool,
    verbose: u8,
}

impl ConsoleEventSink {
    pub fn new(verbose: u8) -> Self {
        Self {
            color: color_enabled(),
            verbose,
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            format!("{}", text.with(color))
        } else {
            text.to_string()
        }
    }

    /// `[ 3/11]` style position label, width-stable across the build
    fn label(index: usize, total: usize) -> String {
        let width = total.to_string().len();
        format!("[{:>width$}/{}]", index + 1, total, width = width)
    }
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        match event {
            BuildEvent::Started {
                target,
                package_count,
            } => {
                println!(
                    "Building environment at {} ({} packages)",
                    target.display(),
                    package_count
                );
            }
            BuildEvent::ManifestFiltered { retained, skipped } => {
                if !skipped.is_empty() {
                    println!(
                        "{} {} retained, skipping: {}",
                        self.paint("->", Color::Cyan),
                        retained,
                        skipped.join(", ")
                    );
                }
            }
            BuildEvent::PlanResolved { order } => {
                if self.verbose > 0 {
                    println!(
                        "{} install order: {}",
                        self.paint("->", Color::Cyan),
                        order.join(" -> ")
                    );
                }
            }
            BuildEvent::ProvisionFinished { root, reused } => {
                let note = if reused { " (reused)" } else { "" };
                println!(
                    "{} environment ready at {}{}",
                    self.paint("ok", Color::Green),
                    root.display(),
                    note
                );
            }
            BuildEvent::CloneStarted { package } => {
                if self.verbose > 0 {
                    println!("   cloning {}", package);
                }
            }
            BuildEvent::CloneFinished { package, reused } => {
                let verb = if reused { "already cloned" } else { "cloned" };
                println!("{} {} {}", self.paint("ok", Color::Green), verb, package);
            }
            BuildEvent::CloneFailed { package, error } => {
                eprintln!(
                    "{} clone {} failed: {}",
                    self.paint("xx", Color::Red),
                    package,
                    error
                );
            }
            BuildEvent::ExtrasInstalled { count } => {
                println!(
                    "{} {} extra distributions installed",
                    self.paint("ok", Color::Green),
                    count
                );
            }
            BuildEvent::InstallStarted {
                index,
                total,
                package,
            } => {
                println!("{} installing {}", Self::label(index, total), package);
            }
            BuildEvent::InstallFinished { .. } => {}
            BuildEvent::InstallSkipped {
                package,
                failed_dependency,
            } => {
                eprintln!(
                    "{} skipping {} (dependency {} failed)",
                    self.paint("!!", Color::Yellow),
                    package,
                    failed_dependency
                );
            }
            BuildEvent::InstallFailed { package, error, .. } => {
                eprintln!(
                    "{} install {} failed: {}",
                    self.paint("xx", Color::Red),
                    package,
                    error
                );
            }
            BuildEvent::Completed { .. } => {}
        }
    }
}

/// Render the end-of-build summary for humans.
///
/// Lists every package with its outcome, aligned on the widest name, then a
/// one-line verdict that matches the process exit code.
pub fn render_summary(report: &BuildReport) -> String {
    let mut rows: Vec<(String, String)> = Vec::new();

    for name in &report.installed {
        rows.push((name.clone(), "installed".to_string()));
    }
    for (name, dep) in &report.skipped {
        rows.push((name.clone(), format!("skipped (dependency {} failed)", dep)));
    }
    for (name, error) in &report.failed {
        rows.push((name.clone(), format!("failed: {}", error)));
    }
    for (name, reason) in &report.filtered {
        rows.push((name.clone(), format!("not built ({})", reason)));
    }

    let name_width = rows
        .iter()
        .map(|(name, _)| UnicodeWidthStr::width(name.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str("\nSummary\n");
    for (name, outcome) in &rows {
        let pad = name_width - UnicodeWidthStr::width(name.as_str());
        out.push_str(&format!("  {}{}  {}\n", name, " ".repeat(pad), outcome));
    }

    for error in &report.errors {
        out.push_str(&format!("  error: {}\n", error));
    }

    let verdict = match report.status() {
        BuildStatus::Success => format!(
            "environment ready: {} packages installed in {:.1}s",
            report.installed.len(),
            report.elapsed.as_secs_f64()
        ),
        BuildStatus::Degraded => format!(
            "environment usable, but degraded: {} installed, {} failed, {} skipped",
            report.installed.len(),
            report.failed.len(),
            report.skipped.len()
        ),
        BuildStatus::Failed => "environment build failed".to_string(),
    };
    out.push_str(&format!("\n{}\n", verdict));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::FilterReason;

    #[test]
    fn label_is_width_stable() {
        assert_eq!(ConsoleEventSink::label(0, 11), "[ 1/11]");
        assert_eq!(ConsoleEventSink::label(10, 11), "[11/11]");
        assert_eq!(ConsoleEventSink::label(2, 9), "[3/9]");
    }

    #[test]
    fn summary_aligns_names_and_reports_success() {
        let mut report = BuildReport::new();
        report.installed.push("caput".to_string());
        report.installed.push("ch-pipeline".to_string());

        let summary = render_summary(&report);
        assert!(summary.contains("caput        installed"));
        assert!(summary.contains("ch-pipeline  installed"));
        assert!(summary.contains("environment ready: 2 packages installed"));
    }

    #[test]
    fn summary_distinguishes_degraded_from_failed() {
        let mut degraded = BuildReport::new();
        degraded.installed.push("caput".to_string());
        degraded
            .failed
            .push(("chimedb".to_string(), "clone failed: auth".to_string()));
        assert!(render_summary(&degraded).contains("environment usable, but degraded"));

        let mut failed = BuildReport::new();
        failed.add_error("environment '/tmp/venv': provisioning failed: no python");
        assert!(render_summary(&failed).contains("environment build failed"));
    }

    #[test]
    fn summary_lists_filtered_packages() {
        let mut report = BuildReport::new();
        report
            .filtered
            .push(("chimedb-config".to_string(), FilterReason::Membership));
        let summary = render_summary(&report);
        assert!(summary.contains("chimedb-config  not built (membership)"));
    }
}
