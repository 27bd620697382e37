use telepath::ReportOutcome;
use telepath::report::{
    HttpReportSink, get_completed_tasks, record_completed_task, send_report,
};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::Workspace;

#[test]
fn first_task_creates_store() {
    let ws = Workspace::new();
    let config = ws.config_for("http://standup.test");

    record_completed_task(&config, "Reviewed PR").unwrap();

    assert_eq!(ws.store_contents().as_deref(), Some("Reviewed PR\n"));
}

#[test]
fn tasks_accumulate_in_order() {
    let ws = Workspace::new();
    let config = ws.config_for("http://standup.test");

    record_completed_task(&config, "A").unwrap();
    record_completed_task(&config, "B").unwrap();

    assert_eq!(get_completed_tasks(&config), "A\nB\n");
}

#[tokio::test]
async fn accepted_report_clears_store() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/irc"))
        .and(body_string_contains("irc_nick=clif_h"))
        .and(body_string_contains("completed=Fixed+bug%0A"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let ws = Workspace::new();
    let config = ws.config_for(&server.uri());
    ws.seed_store("Fixed bug\n");

    let sink = HttpReportSink::from_config(&config);
    let outcome = send_report(&config, &sink).await.unwrap();

    assert_eq!(outcome, ReportOutcome::Cleared { status: 200 });
    assert!(outcome.cleared());
    assert!(ws.store_contents().is_none());
}

#[tokio::test]
async fn rejected_report_keeps_store() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/irc"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let ws = Workspace::new();
    let config = ws.config_for(&server.uri());
    ws.seed_store("Fixed bug\n");

    let sink = HttpReportSink::from_config(&config);
    let outcome = send_report(&config, &sink).await.unwrap();

    assert!(!outcome.cleared());
    assert_eq!(outcome.status(), Some(500));
    assert_eq!(ws.store_contents().as_deref(), Some("Fixed bug\n"));
}

#[tokio::test]
async fn empty_store_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let ws = Workspace::new();
    let config = ws.config_for(&server.uri());

    let sink = HttpReportSink::from_config(&config);
    let outcome = send_report(&config, &sink).await.unwrap();

    assert_eq!(outcome, ReportOutcome::Skipped);
    assert!(ws.store_contents().is_none());
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn failed_report_can_be_retried_later() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/irc"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/irc"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let ws = Workspace::new();
    let config = ws.config_for(&server.uri());
    record_completed_task(&config, "Fixed bug").unwrap();
    let sink = HttpReportSink::from_config(&config);

    let first = send_report(&config, &sink).await.unwrap();
    assert_eq!(first.status(), Some(503));
    record_completed_task(&config, "Wrote docs").unwrap();

    let second = send_report(&config, &sink).await.unwrap();
    assert!(second.cleared());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    let body = String::from_utf8_lossy(&requests[1].body);
    assert!(body.contains("completed=Fixed+bug%0AWrote+docs%0A"), "{body}");
    assert!(ws.store_contents().is_none());
}
