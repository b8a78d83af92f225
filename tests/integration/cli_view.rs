//! End-to-end tests for `confq config view` through the compiled binary.

use super::test_utils::write_sample_project;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_confq(test_dir: &TempDir, args: &[&str]) -> Output {
    let home = test_dir.path().join("home");
    let config_home = test_dir.path().join("xdg");
    std::fs::create_dir_all(&home).unwrap();
    std::fs::create_dir_all(&config_home).unwrap();

    Command::new(env!("CARGO_BIN_EXE_confq"))
        .env("HOME", home.as_os_str())
        .env("XDG_CONFIG_HOME", config_home.as_os_str())
        .env_remove("CONFQ_LOG")
        .arg("--workspace")
        .arg(test_dir.path())
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_list_accounts() {
    let test_dir = TempDir::new().unwrap();
    write_sample_project(test_dir.path());

    let output = run_confq(&test_dir, &["config", "view", "account"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "List of Accounts: alice, bob\n");
}

#[test]
fn test_detail_network() {
    let test_dir = TempDir::new().unwrap();
    write_sample_project(test_dir.path());

    let output = run_confq(&test_dir, &["config", "view", "network", "testnet"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Network Name: testnet\nHost: access.testnet.example:9000\n"
    );
}

#[test]
fn test_not_found_still_exits_zero() {
    let test_dir = TempDir::new().unwrap();
    write_sample_project(test_dir.path());

    let output = run_confq(&test_dir, &["config", "view", "account", "carol"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Account carol does not exist\n");
}

#[test]
fn test_usage_without_project_file() {
    let test_dir = TempDir::new().unwrap();

    let output = run_confq(&test_dir, &["config", "view"]);
    assert!(output.status.success(), "usage must not require a project file");
    assert!(stdout(&output).contains("Usage examples:"));
}

#[test]
fn test_invalid_kind_exits_zero() {
    let test_dir = TempDir::new().unwrap();

    let output = run_confq(&test_dir, &["config", "view", "widget"]);
    assert!(output.status.success());
    assert!(stdout(&output)
        .contains("Valid resources: account, network, emulator, contract, deployment."));
}

#[test]
fn test_missing_project_file_fails() {
    let test_dir = TempDir::new().unwrap();

    let output = run_confq(&test_dir, &["--quiet", "config", "view", "account"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Project configuration not found"), "stderr: {}", stderr);
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_project_flag_and_table_format() {
    let test_dir = TempDir::new().unwrap();
    let project_dir = test_dir.path().join("elsewhere");
    std::fs::create_dir_all(&project_dir).unwrap();
    let project = write_sample_project(&project_dir);
    let project = project.to_string_lossy();

    let output = run_confq(
        &test_dir,
        &["-f", project.as_ref(), "config", "view", "contract", "--format", "table"],
    );
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("List of Contracts\n"));
    assert!(out.contains("FungibleToken"));
    assert!(out.contains("0x9a0766d93b6608b7"));
}

#[test]
fn test_too_many_arguments_rejected() {
    let test_dir = TempDir::new().unwrap();
    write_sample_project(test_dir.path());

    let output = run_confq(&test_dir, &["config", "view", "account", "alice", "extra"]);
    assert!(!output.status.success());
}

#[test]
fn test_settings_command_prints_toml() {
    let test_dir = TempDir::new().unwrap();

    let output = run_confq(&test_dir, &["settings"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("[project]"));
    assert!(out.contains("file = \"confq.json\""));
}
