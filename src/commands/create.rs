//! `create` command glue
//!
//! Wires the real adapters (git, venv, pip) into the build use case and
//! translates the report into console/JSON output and an exit code.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use stackenv::domain::ports::BuildEventSink;
use stackenv::infrastructure::paths::expand_home;
use stackenv::infrastructure::{BuildLock, GitCloner, PipInstaller, VenvProvisioner};
use stackenv::ui::{emit_report, render_summary, ConsoleEventSink, JsonEventSink};
use stackenv::{
    BuildOptions, BuildUseCase, MembershipMode, StackenvError, Transport,
};

use super::load_manifest_or_default;

#[allow(clippy::too_many_arguments)]
pub fn cmd_create(
    path: &Path,
    manifest_path: Option<&Path>,
    non_member: bool,
    transport: Option<Transport>,
    fast: bool,
    compat: bool,
    ignore_system_packages: bool,
    prompt: &str,
    excludes: Vec<String>,
    json: bool,
    verbose: u8,
) -> Result<i32> {
    let target = expand_home(path);
    if target.exists() && !target.is_dir() {
        return Err(StackenvError::TargetNotADirectory { path: target }.into());
    }
    std::fs::create_dir_all(&target)?;
    let _lock = BuildLock::acquire(&target)?;

    let manifest = load_manifest_or_default(manifest_path)?;

    // Stop a doomed build before anything is cloned or provisioned.
    if !GitCloner::check_available() {
        return Err(StackenvError::ToolMissing {
            tool: "git".to_string(),
            hint: "install git and make sure it is on PATH".to_string(),
        }
        .into());
    }
    if !VenvProvisioner::check_available() {
        return Err(StackenvError::ToolMissing {
            tool: "python3".to_string(),
            hint: "a python interpreter is needed to create the environment".to_string(),
        }
        .into());
    }

    let membership = if non_member {
        MembershipMode::NonMember
    } else {
        MembershipMode::Member
    };
    // Members clone over ssh by default; anonymous builds over https.
    let transport = transport.unwrap_or(if non_member {
        Transport::Https
    } else {
        Transport::Ssh
    });

    let options = BuildOptions::new()
        .with_membership(membership)
        .with_transport(transport)
        .with_fast(fast)
        .with_compat_editable(compat)
        .with_ignore_system_packages(ignore_system_packages)
        .with_prompt(prompt)
        .with_excludes(excludes);

    let event_sink: Arc<dyn BuildEventSink> = if json {
        Arc::new(JsonEventSink)
    } else {
        Arc::new(ConsoleEventSink::new(verbose))
    };

    let use_case = BuildUseCase::new(GitCloner, VenvProvisioner::default(), PipInstaller);
    let report = use_case.execute_with_events(&manifest, &options, &target, event_sink);

    if json {
        emit_report(&report)?;
    } else {
        print!("{}", render_summary(&report));
    }

    Ok(report.status().exit_code())
}
