//! Manifest entity - the static catalog of known packages
//!
//! A manifest is immutable once constructed. Filtering produces a new
//! manifest rather than mutating in place, so the resolver always sees a
//! fixed, declaration-ordered package set.

use crate::error::{StackenvError, StackenvResult};

use super::Package;

/// Static catalog of packages plus the extra (seed) distributions installed
/// into the environment before any editable install.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    packages: Vec<Package>,
    extras: Vec<String>,
}

impl Manifest {
    /// Build a manifest, validating its structural invariants: unique names,
    /// no self-dependencies, and every dependency resolving to a declared
    /// package.
    pub fn new(packages: Vec<Package>, extras: Vec<String>) -> StackenvResult<Self> {
        for (i, pkg) in packages.iter().enumerate() {
            if packages[..i].iter().any(|p| p.name() == pkg.name()) {
                return Err(StackenvError::DuplicatePackage {
                    name: pkg.name().to_string(),
                });
            }
            for dep in pkg.depends_on() {
                if dep == pkg.name() {
                    return Err(StackenvError::SelfDependency {
                        name: pkg.name().to_string(),
                    });
                }
                if !packages.iter().any(|p| p.name() == dep) {
                    return Err(StackenvError::DanglingDependency {
                        package: pkg.name().to_string(),
                        missing: dep.clone(),
                    });
                }
            }
        }

        Ok(Self { packages, extras })
    }

    /// Packages in declaration order
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn get(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Extra distributions installed before any editable install
    pub fn extras(&self) -> &[String] {
        &self.extras
    }

    /// Apply a filtering predicate, returning the retained manifest and the
    /// names that were dropped (in declaration order).
    ///
    /// The retained manifest is not re-validated: a retained package may now
    /// reference a dropped dependency, which the resolver reports as a
    /// dangling dependency rather than silently skipping.
    pub fn retain<F>(&self, predicate: F) -> (Manifest, Vec<String>)
    where
        F: Fn(&Package) -> bool,
    {
        let mut retained = Vec::new();
        let mut dropped = Vec::new();
        for pkg in &self.packages {
            if predicate(pkg) {
                retained.push(pkg.clone());
            } else {
                dropped.push(pkg.name().to_string());
            }
        }
        (
            Manifest {
                packages: retained,
                extras: self.extras.clone(),
            },
            dropped,
        )
    }
}
