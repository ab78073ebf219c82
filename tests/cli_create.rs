//! Integration tests for the `create` command's configuration-error paths
//!
//! All scenarios here fail before the build reaches git or pip, so they run
//! without network access or real external tools doing any work.

mod common;

use common::*;

#[test]
fn create_rejects_target_that_is_a_file() {
    let env = TestEnv::new();
    let file_target = env.work.path().join("occupied");
    std::fs::write(&file_target, "not a directory").unwrap();

    let result = env.run(&["create", file_target.to_str().unwrap()]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("not a directory"));
}

#[test]
fn create_rejects_invalid_manifest_before_any_side_effect() {
    let env = TestEnv::new();
    let manifest = env.write_manifest("[[package]\nname = ");

    let result = env.run(&[
        "create",
        &env.target_arg(),
        "--manifest",
        manifest.to_str().unwrap(),
    ]);

    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid manifest"));
    assert!(!env.target_path("code").exists());
    assert!(!env.target_path("venv").exists());
}

#[test]
fn create_rejects_duplicate_package_names() {
    let env = TestEnv::new();
    let manifest = env.write_manifest(
        r#"
        [[package]]
        name = "pkg-core"
        repo = "a/pkg-core"

        [[package]]
        name = "pkg-core"
        repo = "b/pkg-core"
        "#,
    );

    let result = env.run(&[
        "create",
        &env.target_arg(),
        "--manifest",
        manifest.to_str().unwrap(),
    ]);

    assert!(!result.success);
    assert!(result.stderr.contains("duplicate package 'pkg-core'"));
    assert!(!env.target_path("code").exists());
}

#[test]
fn create_with_cyclic_manifest_leaves_target_untouched() {
    let env = TestEnv::new();
    let manifest = env.write_manifest(CYCLIC_MANIFEST);

    let result = env.run(&[
        "create",
        &env.target_arg(),
        "--manifest",
        manifest.to_str().unwrap(),
    ]);

    // resolution (or a missing external tool) stops the build before any
    // clone or environment creation happens
    assert!(!result.success);
    assert!(!env.target_path("code").exists());
    assert!(!env.target_path("venv").exists());
}

#[test]
fn create_creates_missing_target_directory_before_failing_later() {
    let env = TestEnv::new();
    let nested = env.target_path("nested/env");
    let manifest = env.write_manifest("[[package]\nbroken");

    let result = env.run(&[
        "create",
        nested.to_str().unwrap(),
        "--manifest",
        manifest.to_str().unwrap(),
    ]);

    assert!(!result.success);
    // the target directory itself is created up front (it holds the lock)
    assert!(nested.is_dir());
    assert!(!nested.join("code").exists());
}

#[test]
fn create_help_lists_policy_flags() {
    let env = TestEnv::new();
    let result = env.run(&["create", "--help"]);

    assert!(result.success);
    assert!(result.stdout.contains("--non-member"));
    assert!(result.stdout.contains("--transport"));
    assert!(result.stdout.contains("--fast"));
    assert!(result.stdout.contains("--ignore-system-packages"));
    assert!(result.stdout.contains("--exclude"));
}
