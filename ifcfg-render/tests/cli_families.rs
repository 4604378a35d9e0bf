use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn lists_every_family_with_its_versions() {
    Command::new(assert_cmd::cargo::cargo_bin!("ifcfg-render"))
        .arg("families")
        .assert()
        .success()
        .stdout(predicate::str::contains("redhat"))
        .stdout(predicate::str::contains("debian"))
        .stdout(predicate::str::contains("arch versions=legacy,netcfg"))
        .stdout(predicate::str::contains("gentoo versions=legacy,openrc"))
        .stdout(predicate::str::contains("suse"));
}
