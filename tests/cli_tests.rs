//! Binary-level tests. Nothing here reaches a live RPC endpoint.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";
const DEAD: &str = "0x000000000000000000000000000000000000dEaD";

/// The binary with a clean environment, so host variables never leak in.
fn bridgewatch() -> Command {
    let mut cmd = cargo_bin_cmd!("bridgewatch");
    cmd.env_clear().env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_lists_modes() {
    bridgewatch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("wait"))
        .stdout(predicate::str::contains("monitor"))
        .stdout(predicate::str::contains("trigger"))
        .stdout(predicate::str::contains("sweep"));
}

#[test]
fn test_version() {
    bridgewatch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bridgewatch"));
}

#[test]
fn trigger_without_environment_names_rpc_url() {
    bridgewatch()
        .arg("trigger")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing required field: RPC_URL"));
}

#[test]
fn check_without_bridge_names_bridge_address() {
    bridgewatch()
        .arg("check")
        .env("RPC_URL", "http://127.0.0.1:1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing required field: BRIDGE_ADDRESS"));
}

#[test]
fn trigger_requires_threshold_after_wallet() {
    bridgewatch()
        .arg("trigger")
        .env("RPC_URL", "http://127.0.0.1:1")
        .env("BRIDGE_ADDRESS", DEAD)
        .env("RECIPIENT_ADDRESS", DEAD)
        .env("WALLET_PRIVATE_KEY", KEY)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing required field: THRESHOLD"));
}

#[test]
fn sweep_without_token_is_rejected() {
    bridgewatch()
        .arg("sweep")
        .env("RPC_URL", "http://127.0.0.1:1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOKEN_ADDRESS"));
}

#[test]
fn non_numeric_target_is_rejected_at_startup() {
    bridgewatch()
        .args(["check", "ethereum"])
        .env("RPC_URL", "http://127.0.0.1:1")
        .env("BRIDGE_ADDRESS", DEAD)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not an endpoint id"));
}

#[test]
fn zero_monitor_interval_is_rejected() {
    bridgewatch()
        .args(["monitor", "30101", "0"])
        .env("RPC_URL", "http://127.0.0.1:1")
        .env("BRIDGE_ADDRESS", DEAD)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("interval"));
}

#[test]
fn oversized_wait_budget_is_rejected() {
    let minutes = u64::MAX.to_string();
    bridgewatch()
        .args(["wait", "30101", minutes.as_str()])
        .env("RPC_URL", "http://127.0.0.1:1")
        .env("BRIDGE_ADDRESS", DEAD)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("MAX_WAIT_MINUTES"));
}

#[test]
fn invalid_threshold_is_reported() {
    bridgewatch()
        .arg("config")
        .env("THRESHOLD", "lots")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("THRESHOLD"));
}

#[test]
fn config_masks_private_key() {
    bridgewatch()
        .arg("config")
        .env("WALLET_PRIVATE_KEY", KEY)
        .assert()
        .success()
        .stdout(predicate::str::contains("0x4c08...2318"))
        .stdout(predicate::str::contains(KEY).not());
}

#[test]
fn config_reads_file_then_environment() {
    let file = NamedTempFile::new().expect("temp file");
    fs::write(
        file.path(),
        "[bridge]\ntarget = \"30184\"\ninterval_secs = 15\n\n[sweep]\nmin_balance = \"42\"\n",
    )
    .expect("write config");

    bridgewatch()
        .arg("--config")
        .arg(file.path())
        .arg("config")
        .env("POLL_INTERVAL_SECS", "20")
        .assert()
        .success()
        .stdout(predicate::str::contains("30184"))
        .stdout(predicate::str::contains("20s"))
        .stdout(predicate::str::contains("42"));
}

#[test]
fn missing_config_file_fails() {
    bridgewatch()
        .args(["--config", "/nonexistent/bridgewatch.toml", "config"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config file"));
}
