/// End-to-end tests for configuration file support
mod test_utilities;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use test_utilities::jar::{class_bytes, install_jar};

/// Sets up a repository holding one widget jar with the given major version
/// and a manifest depending on it; returns (manifest, repository) paths.
fn setup_workspace(workspace: &Path, major: u16, scope: &str) -> (PathBuf, PathBuf) {
    let repo = workspace.join("repository");
    fs::create_dir_all(&repo).unwrap();
    install_jar(
        &repo,
        "org.example",
        "widget",
        "1.0",
        &[("com/example/Widget.class", &class_bytes(major)[..])],
    );

    let manifest = json!({
        "project": "my-app",
        "dependencyTree": {
            "groupId": "com.acme",
            "artifactId": "my-app",
            "version": "1.0",
            "children": [
                {
                    "groupId": "org.example",
                    "artifactId": "widget",
                    "version": "1.0",
                    "scope": scope
                }
            ]
        }
    });
    let manifest_path = workspace.join("dependency-manifest.json");
    fs::write(
        &manifest_path,
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();

    (manifest_path, repo)
}

#[test]
fn test_config_file_raises_the_level() {
    let workspace = TempDir::new().unwrap();
    let (manifest, repo) = setup_workspace(workspace.path(), 52, "compile");
    let config = workspace.path().join("bytecode-guard.toml");
    fs::write(&config, "supported-jvm-byte-code-level = 52\n").unwrap();

    cargo_bin_cmd!("bytecode-guard")
        .args([
            "-m",
            manifest.to_str().unwrap(),
            "-r",
            repo.to_str().unwrap(),
            "-c",
            config.to_str().unwrap(),
        ])
        .assert()
        .code(0);
}

#[test]
fn test_cli_level_overrides_config_file() {
    let workspace = TempDir::new().unwrap();
    let (manifest, repo) = setup_workspace(workspace.path(), 52, "compile");
    let config = workspace.path().join("bytecode-guard.toml");
    fs::write(&config, "supported-jvm-byte-code-level = 53\n").unwrap();

    cargo_bin_cmd!("bytecode-guard")
        .args([
            "-m",
            manifest.to_str().unwrap(),
            "-r",
            repo.to_str().unwrap(),
            "-c",
            config.to_str().unwrap(),
            "-l",
            "51",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("org.example:widget:1.0"));
}

#[test]
fn test_config_file_can_include_test_scope() {
    let workspace = TempDir::new().unwrap();
    let (manifest, repo) = setup_workspace(workspace.path(), 52, "test");
    let config = workspace.path().join("bytecode-guard.toml");
    fs::write(&config, "exclude-scope-test = false\n").unwrap();

    // Without the config the test-scope subtree would be pruned and the run
    // would pass; with it the violating jar is scanned.
    cargo_bin_cmd!("bytecode-guard")
        .args([
            "-m",
            manifest.to_str().unwrap(),
            "-r",
            repo.to_str().unwrap(),
            "-c",
            config.to_str().unwrap(),
        ])
        .assert()
        .code(1);
}

#[test]
fn test_invalid_config_level_is_an_application_error() {
    let workspace = TempDir::new().unwrap();
    let (manifest, repo) = setup_workspace(workspace.path(), 50, "compile");
    let config = workspace.path().join("bytecode-guard.toml");
    fs::write(&config, "supported-jvm-byte-code-level = 12\n").unwrap();

    cargo_bin_cmd!("bytecode-guard")
        .args([
            "-m",
            manifest.to_str().unwrap(),
            "-r",
            repo.to_str().unwrap(),
            "-c",
            config.to_str().unwrap(),
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("must be at least 45"));
}

#[test]
fn test_missing_explicit_config_is_an_application_error() {
    let workspace = TempDir::new().unwrap();
    let (manifest, repo) = setup_workspace(workspace.path(), 50, "compile");

    cargo_bin_cmd!("bytecode-guard")
        .args([
            "-m",
            manifest.to_str().unwrap(),
            "-r",
            repo.to_str().unwrap(),
            "-c",
            workspace.path().join("absent.toml").to_str().unwrap(),
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}
