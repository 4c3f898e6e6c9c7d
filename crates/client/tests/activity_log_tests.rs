//! The activity log records every call: name and parameters before sending,
//! status and content after the reply, and the error on failure.

mod common;

use common::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};

fn read_log(dir: &TempDir) -> String {
    std::fs::read_to_string(dir.path().join("activity.log")).unwrap_or_default()
}

#[tokio::test]
async fn test_successful_call_is_logged_in_order() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/v2/alerts/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("alerts/count_alerts.json")))
        .mount(&mock_server)
        .await;

    let api = logging_facade(settings_for(
        &mock_server.uri(),
        &dir.path().join("activity.log"),
    ));
    api.count_alerts("status:open").await.unwrap();

    let log = read_log(&dir);
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 4, "unexpected log: {log}");
    assert!(lines[0].contains("API call count_alerts with params"));
    assert!(lines[0].contains("status:open"));
    assert!(lines[1].ends_with("API status code: 200"));
    assert!(lines[2].contains("API content: "));
    assert!(lines[2].contains("\"count\""));
    assert!(lines[3].ends_with("API call count_alerts done"));
    assert!(lines.iter().all(|l| l.starts_with('[')));
}

#[tokio::test]
async fn test_failed_call_logs_exception() {
    let dir = TempDir::new().unwrap();
    let api = logging_facade(settings_for("", &dir.path().join("activity.log")));

    assert!(api.list_schedules().await.is_err());

    let log = read_log(&dir);
    assert!(log.contains("API call list_schedules with params {}"));
    assert!(log.contains("Exception in API call: Invalid URL: host is empty"));
    assert!(!log.contains("API call list_schedules done"));
}

#[tokio::test]
async fn test_api_key_never_logged() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/v2/schedules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
        .mount(&mock_server)
        .await;

    let api = logging_facade(settings_for(
        &mock_server.uri(),
        &dir.path().join("activity.log"),
    ));
    api.list_schedules().await.unwrap();

    assert!(!read_log(&dir).contains(TEST_API_KEY));
}

#[tokio::test]
async fn test_disabled_logging_writes_nothing() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/v2/schedules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
        .mount(&mock_server)
        .await;

    let mut settings = settings_for(&mock_server.uri(), &dir.path().join("activity.log"));
    settings.tygenie.log.enable = false;
    logging_facade(settings).list_schedules().await.unwrap();

    assert!(!dir.path().join("activity.log").exists());
}

#[tokio::test]
async fn test_unwritable_log_file_does_not_fail_call() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/v2/schedules"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
        .mount(&mock_server)
        .await;

    // A directory cannot be opened for appending.
    let api = logging_facade(settings_for(&mock_server.uri(), dir.path()));
    assert!(api.list_schedules().await.is_ok());
}
