//! Completion-client tests against a local stub of the chat-completion
//! endpoint. The stub is a raw TCP listener answering one request with a
//! canned HTTP response.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use vastu_flow::llm::{CompletionClient, CompletionError};

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Serve exactly one HTTP response at an ephemeral port, reading the full
/// request (headers + content-length body) first.
async fn spawn_completion_stub(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = match listener.accept().await {
            Ok(conn) => conn,
            Err(_) => return,
        };

        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => n,
            };
            request.extend_from_slice(&buf[..n]);

            if let Some(header_end) = find_subslice(&request, b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&request[..header_end]).to_string();
                let content_length = headers
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        if name.eq_ignore_ascii_case("content-length") {
                            value.trim().parse::<usize>().ok()
                        } else {
                            None
                        }
                    })
                    .unwrap_or(0);
                if request.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_ask_success_returns_answer_text() {
    let url = spawn_completion_stub(
        "200 OK",
        r#"{"choices":[{"message":{"content":"Answer X"}}]}"#,
    )
    .await;

    let client = CompletionClient::new(url, "test-key").unwrap();
    let answer = client
        .ask("How to arrange bedroom furniture?")
        .await
        .unwrap();

    assert_eq!(answer, "Answer X");
}

#[tokio::test]
async fn test_ask_non_success_status_is_typed() {
    let url = spawn_completion_stub("500 Internal Server Error", r#"{"error":"boom"}"#).await;

    let client = CompletionClient::new(url, "test-key").unwrap();
    let result = client.ask("any question").await;

    match result {
        Err(CompletionError::Status(code)) => assert_eq!(code, 500),
        other => panic!("Expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_ask_malformed_body_is_decode_error() {
    let url = spawn_completion_stub("200 OK", "this is not json").await;

    let client = CompletionClient::new(url, "test-key").unwrap();
    let result = client.ask("any question").await;

    assert!(matches!(result, Err(CompletionError::Decode(_))));
}

#[tokio::test]
async fn test_ask_empty_choices_is_decode_error() {
    let url = spawn_completion_stub("200 OK", r#"{"choices":[]}"#).await;

    let client = CompletionClient::new(url, "test-key").unwrap();
    let result = client.ask("any question").await;

    assert!(matches!(result, Err(CompletionError::Decode(_))));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to obtain a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = CompletionClient::new(format!("http://{addr}"), "test-key").unwrap();
    let result = client.ask("any question").await;

    assert!(matches!(
        result,
        Err(CompletionError::Transport(_)) | Err(CompletionError::Timeout(_))
    ));
}
