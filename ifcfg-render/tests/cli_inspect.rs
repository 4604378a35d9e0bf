use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("ifcfg-render"))
}

const RC_CONF: &str = concat!(
    "# comment\n",
    "gateway=\"default gw 192.0.2.254\"\n",
    "INTERFACES=(eth0 eth1)\n",
);

#[test]
fn inspect_marks_record_kinds_in_text_form() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("rc.conf");
    fs::write(&path, RC_CONF).expect("write rc.conf");

    cmd()
        .arg("inspect")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(". # comment"))
        .stdout(predicate::str::contains("= gateway default gw 192.0.2.254"))
        .stdout(predicate::str::contains("@ INTERFACES [eth0 eth1]"));
}

#[test]
fn inspect_emits_json_records() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("rc.conf");
    fs::write(&path, RC_CONF).expect("write rc.conf");

    let output = cmd()
        .arg("inspect")
        .arg(&path)
        .args(["--format", "json"])
        .output()
        .expect("command output");
    assert!(output.status.success());

    let records: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let records = records.as_array().expect("array of records");
    assert_eq!(records.len(), 3);
    assert_eq!(records[2]["kind"], "array");
    assert_eq!(records[2]["elements"][0], "eth0");
}

#[test]
fn inspect_reports_malformed_files() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("rc.conf");
    fs::write(&path, "DAEMONS=(foo network\n").expect("write rc.conf");

    cmd()
        .arg("inspect")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unterminated array literal"));
}
