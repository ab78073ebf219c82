//! Build Use Case
//!
//! Orchestrates the environment build flow:
//! 1. Filter the manifest (membership policy, explicit excludes)
//! 2. Resolve the install plan (dependencies first, deterministic)
//! 3. Provision the environment and acquire repositories (concurrently)
//! 4. Install manifest extras
//! 5. Install each package editable, strictly in plan order
//!
//! This use case is pure orchestration - acquisition, provisioning and
//! installation are behind ports so the flow can be exercised with fakes.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use crate::domain::entities::Manifest;
use crate::domain::ports::{
    BuildEvent, BuildEventSink, CloneError, EnvironmentProvisioner, InstallFlags, InstallSpec,
    NoopEventSink, PackageInstaller, ProvisionError, ProvisionOptions, ProvisionOutcome,
    RepoCloner,
};
use crate::domain::services::{resolve, InstallPlan};

use super::options::BuildOptions;
use super::report::{BuildReport, FilterReason};

/// Directory under the target path holding cloned source trees
pub const WORKSPACE_DIR: &str = "code";

/// Directory under the target path holding the virtual environment
pub const ENV_DIR: &str = "venv";

/// Build use case - orchestrates the environment build flow
///
/// Parameterized by its ports, allowing for easy testing and different
/// implementations.
pub struct BuildUseCase<C, P, I>
where
    C: RepoCloner,
    P: EnvironmentProvisioner,
    I: PackageInstaller,
{
    cloner: C,
    provisioner: P,
    installer: I,
}

impl<C, P, I> BuildUseCase<C, P, I>
where
    C: RepoCloner,
    P: EnvironmentProvisioner,
    I: PackageInstaller,
{
    pub fn new(cloner: C, provisioner: P, installer: I) -> Self {
        Self {
            cloner,
            provisioner,
            installer,
        }
    }

    /// Execute the build use case
    pub fn execute(&self, manifest: &Manifest, options: &BuildOptions, target: &Path) -> BuildReport {
        self.execute_with_events(manifest, options, target, Arc::new(NoopEventSink))
    }

    /// Execute the build use case with event reporting
    pub fn execute_with_events(
        &self,
        manifest: &Manifest,
        options: &BuildOptions,
        target: &Path,
        event_sink: Arc<dyn BuildEventSink>,
    ) -> BuildReport {
        let started = Instant::now();
        let mut report = BuildReport::new();

        event_sink.on_event(BuildEvent::Started {
            target: target.to_path_buf(),
            package_count: manifest.len(),
        });

        // Step 1: Filter manifest
        let (retained, dropped) = manifest.retain(|pkg| {
            options.membership.admits(pkg.membership())
                && !options.excludes.iter().any(|e| e == pkg.name())
        });
        for name in &dropped {
            let reason = match manifest.get(name) {
                Some(pkg) if !options.membership.admits(pkg.membership()) => {
                    FilterReason::Membership
                }
                _ => FilterReason::Excluded,
            };
            report.filtered.push((name.clone(), reason));
        }
        event_sink.on_event(BuildEvent::ManifestFiltered {
            retained: retained.len(),
            skipped: dropped,
        });

        // Step 2: Resolve install order - aborts before any side effect
        let plan = match resolve(&retained) {
            Ok(plan) => plan,
            Err(e) => {
                report.add_error(e.to_string());
                return self.finish(report, started, &event_sink);
            }
        };
        event_sink.on_event(BuildEvent::PlanResolved {
            order: plan.order().to_vec(),
        });

        let workspace = target.join(WORKSPACE_DIR);
        let env_root = target.join(ENV_DIR);

        if let Err(e) = std::fs::create_dir_all(&workspace) {
            report.add_error(format!(
                "failed to create workspace '{}': {}",
                workspace.display(),
                e
            ));
            return self.finish(report, started, &event_sink);
        }

        // Step 3: Provision the environment while clones run.
        // Cloning has no cross-package ordering requirement, so each
        // repository gets its own thread and a slow clone never holds up
        // the others.
        let provision_options = ProvisionOptions {
            prompt: options.prompt.clone(),
            system_site_packages: !options.ignore_system_packages,
        };
        let (provision_result, clone_failures) = self.provision_and_acquire(
            &retained,
            options,
            &workspace,
            &env_root,
            &provision_options,
            &event_sink,
        );

        match provision_result {
            Ok(reused) => {
                event_sink.on_event(BuildEvent::ProvisionFinished {
                    root: env_root.clone(),
                    reused,
                });
            }
            Err(e) => {
                report.add_error(format!("environment '{}': {}", env_root.display(), e));
                self.record_clone_failures(&mut report, &plan, &clone_failures);
                return self.finish(report, started, &event_sink);
            }
        }

        let flags = InstallFlags {
            build_isolation: !options.fast,
            ignore_installed: options.ignore_system_packages,
            compat_editable: options.compat_editable,
        };

        // Step 4: Extras go in first so build-time tools are present when
        // isolation is off.
        if !retained.extras().is_empty() {
            match self.installer.install(
                &env_root,
                InstallSpec::Distributions(retained.extras()),
                &flags,
            ) {
                Ok(()) => {
                    event_sink.on_event(BuildEvent::ExtrasInstalled {
                        count: retained.extras().len(),
                    });
                }
                Err(e) => {
                    report.add_error(format!("extras: {}", e));
                    self.record_clone_failures(&mut report, &plan, &clone_failures);
                    return self.finish(report, started, &event_sink);
                }
            }
        }

        // Step 5: Editable installs, strictly in plan order. A package is
        // only attempted once every declared dependency installed; anything
        // downstream of a failure is skipped, independent branches proceed.
        let total = plan.len();
        let mut broken: HashMap<String, String> = HashMap::new();
        for (index, name) in plan.iter().enumerate() {
            let Some(pkg) = retained.get(name) else {
                continue;
            };

            if let Some(error) = clone_failures.get(name) {
                report.failed.push((name.to_string(), error.clone()));
                broken.insert(name.to_string(), name.to_string());
                continue;
            }

            if let Some(root) = pkg
                .depends_on()
                .iter()
                .find_map(|dep| broken.get(dep.as_str()))
                .cloned()
            {
                event_sink.on_event(BuildEvent::InstallSkipped {
                    package: name.to_string(),
                    failed_dependency: root.clone(),
                });
                report.skipped.push((name.to_string(), root.clone()));
                broken.insert(name.to_string(), root);
                continue;
            }

            event_sink.on_event(BuildEvent::InstallStarted {
                index,
                total,
                package: name.to_string(),
            });

            match self
                .installer
                .install(&env_root, InstallSpec::Editable(&workspace.join(name)), &flags)
            {
                Ok(()) => {
                    report.installed.push(name.to_string());
                    event_sink.on_event(BuildEvent::InstallFinished {
                        index,
                        package: name.to_string(),
                    });
                }
                Err(e) => {
                    report.failed.push((name.to_string(), e.to_string()));
                    broken.insert(name.to_string(), name.to_string());
                    event_sink.on_event(BuildEvent::InstallFailed {
                        index,
                        package: name.to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }

        self.finish(report, started, &event_sink)
    }

    /// Run provisioning and all clones concurrently; returns the provision
    /// outcome (reused flag) and the acquisition failures keyed by package.
    fn provision_and_acquire(
        &self,
        retained: &Manifest,
        options: &BuildOptions,
        workspace: &Path,
        env_root: &Path,
        provision_options: &ProvisionOptions,
        event_sink: &Arc<dyn BuildEventSink>,
    ) -> (Result<bool, ProvisionError>, HashMap<String, String>) {
        let mut clone_failures = HashMap::new();
        let mut provision_result = Err(ProvisionError::IoError(
            "provisioning did not run".to_string(),
        ));

        thread::scope(|scope| {
            let provision_handle = scope.spawn(|| {
                self.provisioner.provision(env_root, provision_options)
            });

            let clone_handles: Vec<_> = retained
                .packages()
                .iter()
                .map(|pkg| {
                    let dest = workspace.join(pkg.name());
                    let sink = Arc::clone(event_sink);
                    let handle = scope.spawn(move || {
                        sink.on_event(BuildEvent::CloneStarted {
                            package: pkg.name().to_string(),
                        });
                        let result = self.cloner.acquire(pkg, &dest, options.transport);
                        match &result {
                            Ok(outcome) => sink.on_event(BuildEvent::CloneFinished {
                                package: pkg.name().to_string(),
                                reused: outcome.is_reused(),
                            }),
                            Err(e) => sink.on_event(BuildEvent::CloneFailed {
                                package: pkg.name().to_string(),
                                error: e.to_string(),
                            }),
                        }
                        result
                    });
                    (pkg.name().to_string(), handle)
                })
                .collect();

            for (name, handle) in clone_handles {
                let result = handle.join().unwrap_or_else(|_| {
                    Err(CloneError::IoError("acquisition thread panicked".to_string()))
                });
                if let Err(e) = result {
                    clone_failures.insert(name, e.to_string());
                }
            }

            provision_result = provision_handle.join().unwrap_or_else(|_| {
                Err(ProvisionError::IoError(
                    "provisioning thread panicked".to_string(),
                ))
            });
        });

        (
            provision_result.map(|outcome| matches!(outcome, ProvisionOutcome::Reused)),
            clone_failures,
        )
    }

    /// Carry acquisition failures into the report when the build aborts
    /// before reaching the install loop.
    fn record_clone_failures(
        &self,
        report: &mut BuildReport,
        plan: &InstallPlan,
        clone_failures: &HashMap<String, String>,
    ) {
        for name in plan.iter() {
            if let Some(error) = clone_failures.get(name) {
                report.failed.push((name.to_string(), error.clone()));
            }
        }
    }

    fn finish(
        &self,
        mut report: BuildReport,
        started: Instant,
        event_sink: &Arc<dyn BuildEventSink>,
    ) -> BuildReport {
        report.elapsed = started.elapsed();
        event_sink.on_event(BuildEvent::Completed {
            installed_count: report.installed.len(),
            skipped_count: report.skipped.len(),
            failed_count: report.failed.len(),
        });
        report
    }
}
