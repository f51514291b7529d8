use assert_cmd::Command;

#[test]
fn help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("insider-term").expect("binary builds");
    let assert = cmd.arg("--help").assert().success();
    let output = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(output.contains("dash"));
    assert!(output.contains("scan"));
    assert!(output.contains("refresh"));
    assert!(output.contains("health"));
}

#[test]
fn scan_rejects_out_of_range_window() {
    let mut cmd = Command::cargo_bin("insider-term").expect("binary builds");
    cmd.args(["scan", "--baseline-days", "10000"])
        .assert()
        .failure();
}

#[test]
fn version_prints_crate_version() {
    let mut cmd = Command::cargo_bin("insider-term").expect("binary builds");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}
