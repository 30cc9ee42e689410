use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn generate_renders_a_basic_lan_topology() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tikgen"));
    cmd.arg("generate")
        .arg(fixture("fixtures/basic-lan.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("/ipv6 settings"))
        .stdout(predicate::str::contains("add name=LANBridgeSplit"))
        .stdout(predicate::str::contains(
            "add bridge=LANBridgeVPN interface=ether3",
        ))
        .stdout(predicate::str::contains(
            "add address=192.168.10.1/24 interface=LANBridgeSplit",
        ))
        .stdout(predicate::str::contains("configuration.ssid=Home"))
        .stdout(predicate::str::contains("list=WAN-Foreign"))
        .stdout(predicate::str::contains("generate_summary foreign_links=1"));
}

#[test]
fn generate_quiet_prints_only_the_summary_line() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tikgen"));
    cmd.arg("generate")
        .arg(fixture("fixtures/multiwan-vpn.json"))
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "generate_summary foreign_links=2 domestic_links=1",
        ))
        .stdout(predicate::str::contains("/interface").not());
}

#[test]
fn generate_multiwan_vpn_topology_covers_balancing_and_servers() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tikgen"));
    cmd.arg("generate")
        .arg(fixture("fixtures/multiwan-vpn.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "per-connection-classifier=both-addresses-and-ports:2/0",
        ))
        .stdout(predicate::str::contains("pppoe-client-Foreign2"))
        .stdout(predicate::str::contains("gateway=203.0.113.1%ether3-macvlan"))
        .stdout(predicate::str::contains("ipsec-secret=sharedsecret"))
        .stdout(predicate::str::contains(
            "WARNING: certificate=none is rejected by the Windows SSTP client",
        ))
        .stdout(predicate::str::contains("# No users configured for SSTP"))
        .stdout(predicate::str::contains("add name=l2tp-alice user=alice"));
}

#[test]
fn generate_writes_a_plain_script_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("router.rsc");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tikgen"));
    cmd.arg("generate")
        .arg(fixture("fixtures/multiwan-vpn.json"))
        .arg("--output")
        .arg(&out)
        .arg("--quiet")
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).expect("script file");
    assert!(text.contains("/ip firewall mangle"));
    assert!(text.contains("ipsec-secret=sharedsecret"));
    assert!(!text.contains('\u{1b}'), "file output must be plain text");
}

#[test]
fn generate_section_filter_limits_the_output() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tikgen"));
    cmd.arg("generate")
        .arg(fixture("fixtures/basic-lan.json"))
        .arg("--section")
        .arg("/ip address")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "add address=192.168.10.1/24 interface=LANBridgeSplit",
        ))
        .stdout(predicate::str::contains("/interface bridge port").not());
}

#[test]
fn generate_trunk_topology_fans_out_vlans() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tikgen"));
    cmd.arg("generate")
        .arg(fixture("fixtures/trunk.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "add interface=ether5 name=vlan10-Split vlan-id=10",
        ))
        .stdout(predicate::str::contains(
            "add interface=ether5 name=vlan51-WireGuard-1 vlan-id=51",
        ))
        .stdout(predicate::str::contains(
            "add bridge=LANBridgeSplit interface=ether5",
        ));
}

#[test]
fn generate_rejects_unknown_extensions() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("topology.yaml");
    std::fs::write(&path, "{}").expect("write");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tikgen"));
    cmd.arg("generate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported topology file extension"));
}
