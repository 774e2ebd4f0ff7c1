use std::time::Duration;

use coinflip::{
    CoinState, GameResult, HttpReporter, NullReporter, OutcomeReport, ReportError,
    ResultReporter,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// What the stub endpoint saw.
struct Captured {
    head: String,
    body: Vec<u8>,
}

/// Accept one HTTP request, answer it with `status` and hand back what arrived.
async fn stub_endpoint(status: u16) -> (String, oneshot::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/outcome", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        let header_end = loop {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };
        let head = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
        let length: usize = head
            .lines()
            .find_map(|l| l.strip_prefix("content-length:"))
            .map(|v| v.trim().parse().unwrap())
            .unwrap_or(0);
        while buf.len() < header_end + length {
            let n = stream.read(&mut chunk).await.unwrap();
            assert!(n > 0, "connection closed before body");
            buf.extend_from_slice(&chunk[..n]);
        }
        let body = buf[header_end..header_end + length].to_vec();

        let response = format!(
            "HTTP/1.1 {} Stub\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
            status
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
        let _ = tx.send(Captured { head, body });
    });
    (url, rx)
}

#[test]
fn outcome_serializes_with_camel_case_keys() {
    let outcome = OutcomeReport::from(&GameResult::from_final_state(CoinState::Heads));
    assert_eq!(
        serde_json::to_string(&outcome).unwrap(),
        r#"{"playerWins":false,"computerWins":true}"#
    );
}

#[tokio::test]
async fn http_reporter_posts_outcome_as_json() {
    let (url, captured) = stub_endpoint(200).await;
    let reporter = HttpReporter::new(url.clone(), Duration::from_secs(5)).unwrap();
    assert_eq!(reporter.endpoint(), url);

    let outcome = OutcomeReport::from(&GameResult::from_final_state(CoinState::Tails));
    reporter.report(&outcome).await.unwrap();

    let captured = captured.await.unwrap();
    assert!(captured.head.starts_with("post /outcome http/1.1"));
    assert!(captured.head.contains("content-type: application/json"));
    let body: serde_json::Value = serde_json::from_slice(&captured.body).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "playerWins": true, "computerWins": false })
    );
}

#[tokio::test]
async fn http_reporter_surfaces_error_status() {
    let (url, captured) = stub_endpoint(500).await;
    let reporter = HttpReporter::new(url, Duration::from_secs(5)).unwrap();
    let outcome = OutcomeReport {
        player_wins: false,
        computer_wins: true,
    };

    let err = reporter.report(&outcome).await.unwrap_err();
    assert!(matches!(err, ReportError::Status { status: 500 }));
    assert_eq!(err.to_string(), "result endpoint answered with HTTP 500");
    // Exactly one attempt reached the endpoint.
    assert!(captured.await.is_ok());
}

#[tokio::test]
async fn http_reporter_reports_unreachable_endpoint() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/outcome", listener.local_addr().unwrap());
    drop(listener);

    let reporter = HttpReporter::new(url, Duration::from_secs(5)).unwrap();
    let outcome = OutcomeReport {
        player_wins: true,
        computer_wins: false,
    };
    let err = reporter.report(&outcome).await.unwrap_err();
    assert!(matches!(err, ReportError::Transport(_)));
}

#[tokio::test]
async fn null_reporter_accepts_everything() {
    let outcome = OutcomeReport {
        player_wins: true,
        computer_wins: false,
    };
    NullReporter.report(&outcome).await.unwrap();
}
