//! Integration tests for graceful Ctrl+C/SIGINT handling.
//!
//! These tests are Unix-only because they send SIGINT to the child process.
//! We assert:
//! - exit code is 130
//! - stderr contains cancellation message

#![cfg(unix)]

mod common;

use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use common::{TEST_API_KEY, TEST_USER, load_fixture, temp_config_path};
use tokio::sync::Notify;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn tygenie_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("tygenie")
}

fn send_sigint(pid: u32) {
    // SAFETY: standard Unix kill syscall
    unsafe {
        libc::kill(pid as i32, libc::SIGINT);
    }
}

#[tokio::test]
async fn test_alerts_list_ctrl_c_exits_130_with_message() {
    let server = MockServer::start().await;

    // Hold the response well past the point where SIGINT is delivered
    let request_seen = Arc::new(Notify::new());
    let request_seen_clone = Arc::clone(&request_seen);

    Mock::given(method("GET"))
        .and(path("/v2/alerts"))
        .and(header("Authorization", "GenieKey test-genie-key"))
        .respond_with(move |_req: &wiremock::Request| {
            request_seen_clone.notify_one();
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(60))
                .set_body_json(load_fixture("alerts/list_alerts.json"))
        })
        .mount(&server)
        .await;

    let (_dir, config_path) = temp_config_path();
    let child = tokio::process::Command::new(tygenie_bin())
        .env("DOTENV_DISABLED", "1")
        .env_remove("TYGENIE_ALERTS_LIMIT")
        .env_remove("TYGENIE_LOG_ENABLE")
        .env("TYGENIE_CONFIG_PATH", &config_path)
        .env("OPSGENIE_HOST", server.uri())
        .env("OPSGENIE_API_KEY", TEST_API_KEY)
        .env("OPSGENIE_USERNAME", TEST_USER)
        .args(["alerts", "list"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn tygenie");

    let pid = child.id().expect("child pid");
    tokio::time::timeout(Duration::from_secs(5), request_seen.notified())
        .await
        .expect("expected list request before SIGINT");
    send_sigint(pid);

    let output = tokio::time::timeout(Duration::from_secs(5), child.wait_with_output())
        .await
        .expect("process should exit promptly")
        .expect("wait_with_output ok");

    assert_eq!(output.status.code(), Some(130));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Operation cancelled by user"));
}
