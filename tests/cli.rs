mod common;

use std::{fs, process::Command};

use httpmock::prelude::*;
use tempfile::tempdir;

fn qisscraper() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_qisscraper"));
    cmd.env_remove("QIS_SECRETS").env_remove("RUST_LOG");
    cmd
}

#[test]
fn missing_settings_file_is_created() {
    let dir = tempdir().expect("tempdir should be created");
    let path = dir.path().join("secrets.yaml");

    let output = qisscraper()
        .arg("--secrets")
        .arg(&path)
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("was missing and thus created"), "{stderr}");
    assert_eq!(
        fs::read_to_string(&path).expect("template should exist"),
        "user: ''\npassword: ''\n"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn blank_credentials_exit_before_network() {
    let dir = tempdir().expect("tempdir should be created");
    let path = dir.path().join("secrets.yaml");
    // unreachable endpoints: any request attempt would fail differently
    fs::write(
        &path,
        "user: ''\npassword: ''\nlogin_url: 'http://127.0.0.1:9/cas'\n",
    )
    .expect("settings should be written");

    let output = qisscraper()
        .arg("--secrets")
        .arg(&path)
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please maintain your credentials."), "{stderr}");
}

#[test]
fn prints_report() {
    let server = MockServer::start();
    common::mock_portal(&server, true);
    let dir = tempdir().expect("tempdir should be created");
    let path = dir.path().join("secrets.yaml");
    fs::write(&path, common::settings_yaml(&server)).expect("settings should be written");

    let output = qisscraper()
        .arg("--secrets")
        .arg(&path)
        .output()
        .expect("binary should run");

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Your GPA is: 2.67");
    assert_eq!(lines[1], "-".repeat(17));
    assert!(lines[2].starts_with("WS 20/21"));
    assert!(lines[2].ends_with(" > 2.0 (6 ECTS)"));
    assert_eq!(lines[3], "Not yet passed: Statistik");
    assert!(lines[4].ends_with(" > 4.0 (3 ECTS)"));
}

#[test]
fn bad_credentials_report_link_not_found() {
    let server = MockServer::start();
    common::mock_portal(&server, false);
    let dir = tempdir().expect("tempdir should be created");
    let path = dir.path().join("secrets.yaml");
    fs::write(&path, common::settings_yaml(&server)).expect("settings should be written");

    let output = qisscraper()
        .arg("--secrets")
        .arg(&path)
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("A LinkNotFound error occurred"), "{stderr}");
    assert!(stderr.contains("Make sure your credentials are properly maintained."));
}
