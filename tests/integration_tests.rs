//! Integration tests for the wxjson CLI

use std::process::Command;
use std::time::Duration;

fn wxjson() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wxjson"))
}

/// Test that running without a role prints usage and fails
#[test]
fn test_cli_without_args() {
    let output = wxjson().output().expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
    assert!(stderr.contains("wxjson"));
}

/// Test that an unknown role prints usage and fails
#[test]
fn test_cli_unknown_role() {
    let output = wxjson()
        .arg("weather")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
}

/// Test that help lists both roles
#[test]
fn test_cli_help_lists_roles() {
    let output = wxjson()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("server"));
    assert!(stdout.contains("client"));
}

/// Test that the client reports an unreachable server with a non-zero exit
#[test]
fn test_client_without_server() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let output = wxjson()
        .args(["client", "--url", &format!("http://{addr}")])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unable to reach the weather server"));
}

/// Test that an invalid bind address is rejected before binding
#[test]
fn test_server_invalid_address() {
    let output = wxjson()
        .args(["server", "--addr", "not-an-address"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid bind address"));
}

/// Test the combined demo end to end
#[test]
fn test_demo_prints_response() {
    let mut child = wxjson()
        .arg("demo")
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    let deadline = std::time::Instant::now() + Duration::from_secs(30);
    while child.try_wait().unwrap().is_none() {
        assert!(std::time::Instant::now() < deadline, "demo did not finish");
        std::thread::sleep(Duration::from_millis(50));
    }

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Response:  {"));
    assert!(stdout.contains("\"temp_forecast\":[30,32,29]"));
    assert!(stdout.contains("Zzyzx: cloudy, 31°C (wind S 20)"));
}
