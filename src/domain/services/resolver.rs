//! Install-order resolution service
//!
//! Pure domain logic for turning a manifest into a dependency-respecting
//! install order, without performing any I/O.
//!
//! The sort repeatedly selects the earliest-declared package whose
//! dependencies have all been emitted, so an unchanged manifest always
//! resolves to the same plan. A package that can never be emitted is either
//! part of a cycle or references a dependency missing from the (filtered)
//! manifest; the two cases are reported as distinct errors.

use crate::domain::entities::Manifest;
use crate::error::{StackenvError, StackenvResult};

/// Deterministic dependency-respecting install order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    order: Vec<String>,
}

impl InstallPlan {
    /// Package names, dependencies first
    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Position of a package in the plan
    pub fn position(&self, name: &str) -> Option<usize> {
        self.order.iter().position(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

impl std::fmt::Display for InstallPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.order.join(" -> "))
    }
}

/// Resolve the manifest into an install plan.
///
/// Fails with [`StackenvError::DanglingDependency`] when a retained package
/// references a name not present in the manifest (e.g. removed by
/// filtering), and with [`StackenvError::DependencyCycle`] when the declared
/// dependencies are not acyclic. The returned plan is a permutation of the
/// manifest's package names in which every package appears after all of its
/// dependencies.
pub fn resolve(manifest: &Manifest) -> StackenvResult<InstallPlan> {
    let packages = manifest.packages();

    // Dangling references are a configuration error distinct from a cycle.
    for pkg in packages {
        for dep in pkg.depends_on() {
            if !manifest.contains(dep) {
                return Err(StackenvError::DanglingDependency {
                    package: pkg.name().to_string(),
                    missing: dep.clone(),
                });
            }
        }
    }

    let mut emitted = vec![false; packages.len()];
    let mut order = Vec::with_capacity(packages.len());

    // Kahn's algorithm, scanning in declaration order so ties always break
    // the same way for an unchanged manifest.
    while order.len() < packages.len() {
        let ready = packages.iter().enumerate().find(|(i, pkg)| {
            !emitted[*i]
                && pkg.depends_on().iter().all(|dep| {
                    order.iter().any(|done: &String| done == dep)
                })
        });

        match ready {
            Some((i, pkg)) => {
                emitted[i] = true;
                order.push(pkg.name().to_string());
            }
            None => {
                return Err(StackenvError::DependencyCycle {
                    cycle: find_cycle(manifest, &emitted),
                });
            }
        }
    }

    Ok(InstallPlan { order })
}

/// Extract one cycle from the unemitted remainder of the graph.
///
/// Every unemitted package has at least one unemitted dependency, so
/// following first unemitted dependencies must revisit a package; the walk
/// from the first visit to the revisit is the reported cycle, closed by
/// repeating the entry name.
fn find_cycle(manifest: &Manifest, emitted: &[bool]) -> Vec<String> {
    let packages = manifest.packages();
    let start = match packages.iter().enumerate().find(|(i, _)| !emitted[*i]) {
        Some((_, pkg)) => pkg.name().to_string(),
        None => return Vec::new(),
    };

    let mut path: Vec<String> = vec![start];
    loop {
        let last = path.last().map(String::as_str).unwrap_or_default();
        let Some(current) = manifest.get(last) else {
            return path;
        };
        let next = current
            .depends_on()
            .iter()
            .find(|dep| {
                packages
                    .iter()
                    .enumerate()
                    .any(|(i, p)| !emitted[i] && p.name() == dep.as_str())
            })
            .cloned();

        let Some(next) = next else {
            // Only reachable if the remainder was not actually cyclic.
            return path;
        };

        if let Some(pos) = path.iter().position(|n| *n == next) {
            path.push(next);
            return path.split_off(pos);
        }
        path.push(next);
    }
}
