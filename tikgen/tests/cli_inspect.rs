use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn inspect_prints_the_summary_line() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tikgen"));
    cmd.arg("inspect")
        .arg(fixture("fixtures/basic-lan.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "generate_summary foreign_links=1 domestic_links=0 wireless=1",
        ))
        .stdout(predicate::str::contains("sections="))
        .stdout(predicate::str::contains("commands="))
        .stdout(predicate::str::contains("warnings=0"));
}

#[test]
fn inspect_counts_vpn_protocols_and_users() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tikgen"));
    cmd.arg("inspect")
        .arg(fixture("fixtures/multiwan-vpn.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("vpn_protocols=2 vpn_users=1"));
}

#[test]
fn inspect_json_is_machine_readable() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tikgen"));
    cmd.arg("inspect")
        .arg(fixture("fixtures/trunk.toml"))
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"foreign_links\": 0"))
        .stdout(predicate::str::contains("\"sections\":"));
}

#[test]
fn inspect_fails_cleanly_on_a_missing_file() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tikgen"));
    cmd.arg("inspect")
        .arg(fixture("fixtures/does-not-exist.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"));
}
