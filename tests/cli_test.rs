use httpmock::prelude::*;
use httpmock::Method::HEAD;
use std::process::{Command, Output};

const USAGE_ERROR: &str = r#"{"error": "Company name required"}"#;

fn resolver_command(clearbit_url: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_logo-resolver"));
    cmd.env_remove("BRANDFETCH_API_KEY")
        .env_remove("RUST_LOG")
        .env("LOGO_CLEARBIT_BASE_URL", clearbit_url)
        .env("LOGO_REQUEST_TIMEOUT_SECS", "2");
    cmd
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_missing_argument_prints_json_error() {
    let output = resolver_command("http://127.0.0.1:1").output().unwrap();

    assert!(!output.status.success());
    assert_eq!(stdout_of(&output), USAGE_ERROR);
}

#[test]
fn test_extra_arguments_print_json_error() {
    let output = resolver_command("http://127.0.0.1:1")
        .args(["Acme", "Rockets"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(stdout_of(&output), USAGE_ERROR);
}

#[test]
fn test_blank_argument_prints_json_error() {
    let output = resolver_command("http://127.0.0.1:1")
        .arg("   ")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(stdout_of(&output), USAGE_ERROR);
}

#[test]
fn test_single_argument_prints_logo_result() {
    let server = MockServer::start();
    let head_mock = server.mock(|when, then| {
        when.method(HEAD).path("/acmerockets.com");
        then.status(404);
    });

    let output = resolver_command(&server.base_url())
        .arg("Acme Rockets")
        .output()
        .unwrap();

    assert!(output.status.success());
    head_mock.assert();

    let stdout = stdout_of(&output);
    assert_eq!(stdout.lines().count(), 1);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["source"], "initials");
    assert_eq!(json["initials"], "AR");
    assert!(json["url"]
        .as_str()
        .unwrap()
        .starts_with("https://ui-avatars.com/api/?name=AR"));
}

#[test]
fn test_hyphen_leading_name_prints_logo_result() {
    let server = MockServer::start();
    let head_mock = server.mock(|when, then| {
        when.method(HEAD).path("/acme.com");
        then.status(404);
    });

    let output = resolver_command(&server.base_url())
        .arg("-Acme")
        .output()
        .unwrap();

    assert!(output.status.success());
    head_mock.assert();

    let json: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(json["source"], "initials");
    assert_eq!(json["initials"], "-");
}

#[test]
fn test_clearbit_hit_reported_as_clearbit() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(HEAD).path("/google.com");
        then.status(200);
    });

    let output = resolver_command(&server.base_url())
        .arg("Google")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(json["source"], "clearbit");
    assert_eq!(json["url"], format!("{}/google.com", server.base_url()));
    assert_eq!(json["initials"], "G");
}

#[test]
fn test_invalid_configuration_exits_with_config_status() {
    let output = resolver_command("not-a-url")
        .arg("Google")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_of(&output).is_empty());
}
