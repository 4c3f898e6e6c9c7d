//! Failures never escape the façade: every one becomes an `Absence` that
//! names the failed operation.

mod common;

use std::time::Duration;

use common::*;
use tygenie_client::{ClientError, ListAlertsParams, OnCallParams, OperationKind};
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_unconfigured_host_is_absence() {
    let api = facade("");

    let absence = api.list_alerts(&ListAlertsParams::default()).await.unwrap_err();
    assert_eq!(absence.operation, OperationKind::ListAlerts);
    assert!(matches!(absence.cause, ClientError::InvalidUrl(_)));

    assert!(api.get_account_info().await.ok().is_none());
    assert!(api.ack_alert(&AlertRef::id("x"), "").await.ok().is_none());
}

#[tokio::test]
async fn test_server_error_is_absence_with_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/alerts/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(load_fixture("alerts/error_not_found.json")),
        )
        .mount(&mock_server)
        .await;

    let absence = facade(&mock_server.uri())
        .get_alert(&AlertRef::id("missing"))
        .await
        .unwrap_err();

    assert_eq!(absence.operation, OperationKind::GetAlert);
    assert_eq!(absence.cause.status(), Some(404));
    match absence.cause {
        ClientError::ApiError {
            message,
            request_id,
            ..
        } => {
            assert_eq!(message, "Alert with id [missing] does not exist");
            assert_eq!(
                request_id.as_deref(),
                Some("6c3d8a61-1b4e-4f0e-8a57-5c2f7d1b0e11")
            );
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_is_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/account"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let absence = facade(&mock_server.uri())
        .get_account_info()
        .await
        .unwrap_err();
    assert!(absence.cause.is_auth_error());
}

#[tokio::test]
async fn test_internal_server_error_is_absence() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/schedules"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let absence = facade(&mock_server.uri())
        .list_schedules()
        .await
        .unwrap_err();
    assert_eq!(absence.cause.status(), Some(500));
    assert!(absence.to_string().contains("list_schedules"));
}

#[tokio::test]
async fn test_malformed_body_is_absence() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/alerts/count"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let absence = facade(&mock_server.uri())
        .count_alerts("")
        .await
        .unwrap_err();
    assert!(matches!(absence.cause, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_timeout_is_absence() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/schedules/on-calls"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("schedules/on_calls.json"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let api = ApiFacade::builder()
        .host(mock_server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let absence = api.whois_on_call(OnCallParams::default()).await.unwrap_err();
    assert_eq!(absence.operation, OperationKind::GetOnCalls);
    assert!(absence.is_timeout());
    assert!(matches!(absence.cause, ClientError::Timeout(d) if d == Duration::from_millis(100)));
}

#[tokio::test]
async fn test_connection_refused_is_absence() {
    // Nothing listens on the discard port.
    let api = facade("http://127.0.0.1:9");
    let absence = api.list_schedules().await.unwrap_err();
    assert!(matches!(absence.cause, ClientError::HttpError(_)));
}
