//! Manifest loading
//!
//! Reads the TOML package catalog into the domain [`Manifest`]. Unknown
//! keys are collected as non-fatal warnings (key, file, line, suggestion)
//! instead of being rejected, so a typo degrades loudly rather than
//! silently changing the build.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::{Manifest, Package};
use crate::domain::value_objects::Membership;
use crate::error::{StackenvError, StackenvResult};

/// Manifest compiled into the binary and used when no `--manifest` is given
pub const DEFAULT_MANIFEST: &str = include_str!("default_manifest.toml");

const DEFAULT_MANIFEST_LABEL: &str = "<built-in>";

/// Raw manifest document shape
#[derive(Debug, Deserialize)]
struct ManifestDoc {
    #[serde(default)]
    extras: Vec<String>,
    #[serde(default, rename = "package")]
    packages: Vec<PackageDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct PackageDoc {
    name: String,
    repo: String,
    #[serde(default)]
    host: Option<String>,
    #[serde(default)]
    membership: Membership,
    #[serde(default)]
    branch: Option<String>,
    #[serde(default)]
    depends_on: Vec<String>,
}

impl PackageDoc {
    fn into_package(self) -> Package {
        let mut pkg = Package::new(self.name, self.repo)
            .with_membership(self.membership)
            .with_depends_on(self.depends_on);
        if let Some(host) = self.host {
            pkg = pkg.with_host(host);
        }
        if let Some(branch) = self.branch {
            pkg = pkg.with_branch(branch);
        }
        pkg
    }
}

/// Non-fatal manifest warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load a manifest from a TOML file, collecting unknown-key warnings.
pub fn load_manifest(path: &Path) -> StackenvResult<(Manifest, Vec<ManifestWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_manifest(&content, path)
}

/// Load the manifest compiled into the binary.
pub fn load_default_manifest() -> StackenvResult<Manifest> {
    let (manifest, _warnings) =
        parse_manifest(DEFAULT_MANIFEST, Path::new(DEFAULT_MANIFEST_LABEL))?;
    Ok(manifest)
}

fn parse_manifest(
    content: &str,
    source: &Path,
) -> StackenvResult<(Manifest, Vec<ManifestWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let doc: ManifestDoc = serde_ignored::deserialize(deserializer, |path| {
        unknown_paths.push(path.to_string());
    })
    .map_err(|e| StackenvError::InvalidManifest {
        file: source.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ManifestWarning {
                key: key.clone(),
                file: source.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    let manifest = Manifest::new(
        doc.packages.into_iter().map(PackageDoc::into_package).collect(),
        doc.extras,
    )?;

    Ok((manifest, warnings))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "extras",
        "package",
        "name",
        "repo",
        "host",
        "membership",
        "branch",
        "depends-on",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = std::cmp::min(
                std::cmp::min(prev[j + 1] + 1, curr[j] + 1),
                prev[j] + cost,
            );
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Transport;

    fn parse(content: &str) -> StackenvResult<(Manifest, Vec<ManifestWarning>)> {
        parse_manifest(content, Path::new("manifest.toml"))
    }

    #[test]
    fn default_manifest_parses_cleanly() {
        let (manifest, warnings) =
            parse_manifest(DEFAULT_MANIFEST, Path::new(DEFAULT_MANIFEST_LABEL)).unwrap();
        assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
        assert_eq!(manifest.len(), 11);
        assert_eq!(manifest.extras().len(), 5);
        assert!(manifest
            .get("chimedb-config")
            .unwrap()
            .membership()
            .is_restricted());
    }

    #[test]
    fn minimal_package_uses_defaults() {
        let (manifest, warnings) = parse(
            r#"
            [[package]]
            name = "caput"
            repo = "radiocosmology/caput"
            "#,
        )
        .unwrap();
        assert!(warnings.is_empty());
        let pkg = manifest.get("caput").unwrap();
        assert_eq!(pkg.host(), "github.com");
        assert!(!pkg.membership().is_restricted());
        assert!(pkg.depends_on().is_empty());
    }

    #[test]
    fn branch_and_host_are_loaded() {
        let (manifest, _) = parse(
            r#"
            [[package]]
            name = "tools"
            repo = "internal/tools"
            host = "git.example.org"
            branch = "stable"
            "#,
        )
        .unwrap();
        let pkg = manifest.get("tools").unwrap();
        assert_eq!(pkg.branch(), Some("stable"));
        assert_eq!(
            pkg.clone_url(Transport::Https),
            "https://git.example.org/internal/tools.git"
        );
    }

    #[test]
    fn unknown_key_produces_warning_with_suggestion() {
        let (_, warnings) = parse(
            r#"
            [[package]]
            name = "caput"
            repo = "radiocosmology/caput"
            depends = ["cora"]
            "#,
        )
        .unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "depends");
        assert_eq!(warnings[0].line, Some(5));
        assert_eq!(warnings[0].suggestion, None);
    }

    #[test]
    fn near_miss_key_suggests_correction() {
        let (_, warnings) = parse(
            r#"
            extra = ["zarr"]

            [[package]]
            name = "caput"
            repo = "radiocosmology/caput"
            "#,
        )
        .unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "extra");
        assert_eq!(warnings[0].suggestion, Some("extras".to_string()));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let err = parse("[[package]\nname = ").unwrap_err();
        assert!(matches!(err, StackenvError::InvalidManifest { .. }));
    }

    #[test]
    fn duplicate_names_are_rejected_at_load() {
        let err = parse(
            r#"
            [[package]]
            name = "caput"
            repo = "a/caput"

            [[package]]
            name = "caput"
            repo = "b/caput"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, StackenvError::DuplicatePackage { .. }));
    }

    #[test]
    fn load_default_manifest_succeeds() {
        let manifest = load_default_manifest().unwrap();
        assert!(manifest.contains("caput"));
        assert!(manifest.contains("ch-pipeline"));
    }
}
