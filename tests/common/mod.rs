#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;

pub fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("agecheck");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn run_json(args: &[&str]) -> Value {
    let out = cmd()
        .arg("--json")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}

pub fn run_json_stdin(args: &[&str], stdin: &str) -> Value {
    let out = cmd()
        .arg("--json")
        .args(args)
        .write_stdin(stdin)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}

pub fn run_json_failure(args: &[&str], stdin: &str) -> Value {
    let out = cmd()
        .arg("--json")
        .args(args)
        .write_stdin(stdin)
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("error json output")
}
