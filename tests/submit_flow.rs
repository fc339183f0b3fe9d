mod common;

use common::{closed_endpoint, StubServer};
use std::sync::Arc;
use std::time::Duration;
use fwa_detect::client::cli_client::{analyze_once, run_repl, run_repl_with_interrupt};
use fwa_detect::client::models::app_state::{AnalysisClient, RequestState};
use fwa_detect::client::services::analysis_service::AnalysisService;
use fwa_detect::common::models::AnalysisResult;
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::sync::Notify;

#[tokio::test]
async fn blank_input_never_reaches_the_service() {
    let server = StubServer::respond(200, r#"{"analysis":"ok"}"#).await;
    let mut client = AnalysisClient::new();
    client.set_input(" \t ");
    assert!(client.begin_submit().is_none());
    assert_eq!(client.state(), &RequestState::Idle);
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn success_then_failure_keeps_first_result() {
    let good = StubServer::respond(200, r#"{"analysis":"Risk: LOW"}"#).await;
    let bad = StubServer::respond(500, "{}").await;

    let mut client = AnalysisClient::new();
    client.set_input("routine checkup billed once");

    let pending = client.begin_submit().unwrap();
    let svc = AnalysisService::new(good.endpoint()).unwrap();
    assert!(client.finish(svc.run(pending).await));
    assert_eq!(client.state(), &RequestState::Completed);

    let pending = client.begin_submit().unwrap();
    let svc = AnalysisService::new(bad.endpoint()).unwrap();
    assert!(client.finish(svc.run(pending).await));

    assert!(!client.is_loading());
    assert!(client.error().unwrap().is_http());
    assert_eq!(client.result(), Some(&AnalysisResult::new("Risk: LOW")));
}

#[tokio::test]
async fn network_error_clears_loading_without_propagating() {
    let svc = AnalysisService::new(closed_endpoint().await).unwrap();
    let mut client = AnalysisClient::new();
    client.set_input("claim");
    let pending = client.begin_submit().unwrap();
    client.finish(svc.run(pending).await);
    assert!(!client.is_loading());
    assert!(client.can_submit());
    assert!(client.result().is_none());
}

#[tokio::test]
async fn analyze_once_returns_text_or_error() {
    let server = StubServer::respond(200, r#"{"analysis":"ok"}"#).await;
    let svc = AnalysisService::new(server.endpoint()).unwrap();
    assert_eq!(analyze_once(&svc, "claim").await.unwrap(), "ok");

    let server = StubServer::respond(503, "{}").await;
    let svc = AnalysisService::new(server.endpoint()).unwrap();
    let err = analyze_once(&svc, "claim").await.unwrap_err();
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn repl_skips_blank_lines_and_prints_analysis() {
    let server = StubServer::respond(200, r#"{"analysis":"Risk: HIGH"}"#).await;
    let svc = AnalysisService::new(server.endpoint()).unwrap();

    let input = b"\n   \nduplicate claims for one visit\n/quit\nnever sent\n";
    let (mut out, mut err) = (Vec::new(), Vec::new());
    run_repl(&svc, BufReader::new(&input[..]), &mut out, &mut err).await.unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("[ANALYSIS]\nRisk: HIGH"));
    assert!(err.is_empty());
    assert!(out.contains("Bye."));
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].body.contains("duplicate claims for one visit"));
}

#[tokio::test]
async fn repl_retry_resends_failed_text() {
    let server = StubServer::respond(500, "{}").await;
    let svc = AnalysisService::new(server.endpoint()).unwrap();

    let input = b"/retry\nupcoding suspected\n/retry\n";
    let (mut out, mut err) = (Vec::new(), Vec::new());
    run_repl(&svc, BufReader::new(&input[..]), &mut out, &mut err).await.unwrap();

    let out = String::from_utf8(out).unwrap();
    let err = String::from_utf8(err).unwrap();
    assert!(out.contains("Nothing to retry."));
    assert!(!out.contains("[ERROR]"));
    assert_eq!(err.matches("[ERROR] Analysis failed (HTTP 500)").count(), 2);
    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.body.contains("upcoding suspected")));
}

fn notify_interrupt(notify: &Arc<Notify>) -> impl FnMut() -> std::pin::Pin<Box<dyn std::future::Future<Output = ()> + Send>> {
    let notify = notify.clone();
    move || {
        let notify = notify.clone();
        Box::pin(async move { notify.notified().await })
    }
}

#[tokio::test]
async fn interrupt_at_idle_prompt_ends_session() {
    let server = StubServer::respond(200, r#"{"analysis":"ok"}"#).await;
    let svc = AnalysisService::new(server.endpoint()).unwrap();

    // keep the writer half open so the prompt waits for input
    let (_input_tx, input_rx) = tokio::io::duplex(64);
    let notify = Arc::new(Notify::new());
    notify.notify_one();

    let (mut out, mut err) = (Vec::new(), Vec::new());
    tokio::time::timeout(
        Duration::from_secs(5),
        run_repl_with_interrupt(&svc, BufReader::new(input_rx), &mut out, &mut err, notify_interrupt(&notify)),
    )
    .await
    .expect("session should end on interrupt")
    .unwrap();

    assert!(String::from_utf8(out).unwrap().contains("[CLIENT] Bye."));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn interrupt_cancels_in_flight_then_ends_session_when_idle() {
    let server = StubServer::hang().await;
    let svc = AnalysisService::new(server.endpoint()).unwrap();

    let (mut input_tx, input_rx) = tokio::io::duplex(64);
    let notify = Arc::new(Notify::new());
    let interrupt = notify_interrupt(&notify);

    let driver = {
        let notify = notify.clone();
        let requests = server.requests.clone();
        async move {
            input_tx.write_all(b"claim\n").await.unwrap();
            for _ in 0..200 {
                if !requests.lock().unwrap().is_empty() {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
            notify.notify_one();
            tokio::time::sleep(Duration::from_millis(50)).await;
            notify.notify_one();
            input_tx
        }
    };

    let (mut out, mut err) = (Vec::new(), Vec::new());
    let session = run_repl_with_interrupt(&svc, BufReader::new(input_rx), &mut out, &mut err, interrupt);
    let (result, _input_tx) = tokio::time::timeout(Duration::from_secs(5), async { tokio::join!(session, driver) })
        .await
        .expect("session should end after second interrupt");
    result.unwrap();

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("[CLIENT] Request cancelled."));
    assert!(out.contains("[CLIENT] Bye."));
    assert_eq!(server.requests().len(), 1);
}
