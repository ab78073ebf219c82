//! `plan` command glue
//!
//! Resolves and prints the install order without touching the filesystem,
//! the network, or any external tool.

use std::path::Path;

use anyhow::Result;

use stackenv::ui::json;
use stackenv::{resolve, MembershipMode};

use super::load_manifest_or_default;

pub fn cmd_plan(
    manifest_path: Option<&Path>,
    non_member: bool,
    excludes: Vec<String>,
    json_output: bool,
) -> Result<i32> {
    let manifest = load_manifest_or_default(manifest_path)?;

    let membership = if non_member {
        MembershipMode::NonMember
    } else {
        MembershipMode::Member
    };
    let (retained, _dropped) = manifest.retain(|pkg| {
        membership.admits(pkg.membership()) && !excludes.iter().any(|e| e == pkg.name())
    });

    let plan = resolve(&retained)?;

    if json_output {
        json::emit(serde_json::json!({
            "event": "plan",
            "order": plan.order(),
        }))?;
    } else {
        println!("Install order ({} packages):", plan.len());
        let width = plan.len().to_string().len();
        for (i, name) in plan.iter().enumerate() {
            println!("  {:>width$}. {}", i + 1, name, width = width);
        }
    }

    Ok(0)
}
