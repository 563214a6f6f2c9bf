use std::sync::Arc;
use std::time::Duration;

use ankiconnect_fabric::{
    channel::Channel,
    codec::{Codec, JsonCodec},
    error::Error,
    transport::{HttpTransport, Method, ScriptedTransport, Transport},
};
use pretty_assertions::assert_eq;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct TestMessage {
    id: u32,
    data: String,
}

/// Read one HTTP request (head and body) from the stream
async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let len = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .map(|value| value.trim().parse::<usize>().unwrap())
                .unwrap_or(0);
            if buf.len() >= end + 4 + len {
                break;
            }
        }
    }

    String::from_utf8(buf).unwrap()
}

/// Serve a single request with `status` and `body`; the handle yields the raw request
async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;

        let response = format!(
            "HTTP/1.1 {status} OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.flush().await.unwrap();
        request
    });

    (url, handle)
}

#[tokio::test]
async fn http_posts_body_and_returns_response_text() {
    let (url, server) = serve_once(200, r#"{"result":6,"error":null}"#).await;

    let transport = HttpTransport::new();
    let body = br#"{"action":"version","version":6}"#.to_vec();
    let response = transport.send(Method::POST, &url, body).await.unwrap();

    assert_eq!(response, r#"{"result":6,"error":null}"#);

    let request = server.await.unwrap();
    assert!(request.starts_with("POST / HTTP/1.1"));
    assert!(request.ends_with(r#"{"action":"version","version":6}"#));
}

#[tokio::test]
async fn http_reports_error_status() {
    let (url, _server) = serve_once(500, "boom").await;

    let transport = HttpTransport::new();
    let result = transport.send(Method::POST, &url, b"{}".to_vec()).await;

    match result.unwrap_err() {
        Error::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("Expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn http_connection_refused_is_http_error() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = HttpTransport::new();
    let result = transport
        .send(Method::POST, &format!("http://{addr}/"), b"{}".to_vec())
        .await;

    assert!(matches!(result, Err(Error::Http(_))));
}

#[tokio::test]
async fn http_timeout_fires() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Server that accepts but never answers
    tokio::spawn(async move {
        let (_stream, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(10)).await;
    });

    let transport = HttpTransport::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let result = transport
        .send(Method::POST, &format!("http://{addr}/"), b"{}".to_vec())
        .await;

    match result.unwrap_err() {
        Error::Http(e) => assert!(e.is_timeout()),
        other => panic!("Expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn scripted_replays_in_order_and_records_requests() {
    let transport = ScriptedTransport::new();
    transport.respond("first").respond("second");

    let a = transport
        .send(Method::POST, "http://localhost/", b"one".to_vec())
        .await
        .unwrap();
    let b = transport
        .send(Method::GET, "http://localhost/x", b"two".to_vec())
        .await
        .unwrap();

    assert_eq!(a, "first");
    assert_eq!(b, "second");
    assert_eq!(transport.remaining(), 0);

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].body_text(), "one");
    assert_eq!(requests[1].method, Method::GET);
    assert_eq!(requests[1].url, "http://localhost/x");
}

#[tokio::test]
async fn scripted_replays_queued_failure() {
    let transport = ScriptedTransport::new();
    transport.fail(Error::custom("network down"));

    let result = transport.send(Method::POST, "http://localhost/", vec![]).await;

    match result.unwrap_err() {
        Error::Custom(msg) => assert_eq!(msg, "network down"),
        other => panic!("Expected custom error, got {other:?}"),
    }
}

#[tokio::test]
async fn scripted_fails_when_exhausted() {
    let transport = ScriptedTransport::new();

    let result = transport.send(Method::POST, "http://localhost/", vec![]).await;

    assert!(matches!(result, Err(Error::Custom(_))));
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn json_codec_is_compact_and_keeps_unicode() {
    let message = TestMessage {
        id: 7,
        data: "猫/ねこ".to_string(),
    };

    let bytes = JsonCodec.encode(&message).unwrap();
    assert_eq!(
        String::from_utf8(bytes.clone()).unwrap(),
        r#"{"id":7,"data":"猫/ねこ"}"#
    );

    let decoded: TestMessage = JsonCodec.decode(&bytes).unwrap();
    assert_eq!(decoded, message);
}

#[tokio::test]
async fn channel_encodes_posts_and_decodes() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond(r#"{"id":2,"data":"pong"}"#);

    let endpoint = "http://127.0.0.1:8765/".parse().unwrap();
    let channel = Channel::from_transport(endpoint, transport.clone(), JsonCodec);

    let request = TestMessage {
        id: 1,
        data: "ping".to_string(),
    };
    let response: TestMessage = channel.request(&request).await.unwrap();

    assert_eq!(
        response,
        TestMessage {
            id: 2,
            data: "pong".to_string()
        }
    );

    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::POST);
    assert_eq!(sent[0].url, "http://127.0.0.1:8765/");
    assert_eq!(sent[0].body_text(), r#"{"id":1,"data":"ping"}"#);
}

#[tokio::test]
async fn channel_rejects_malformed_response() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.respond("<html>not json</html>");

    let endpoint = "http://127.0.0.1:8765/".parse().unwrap();
    let channel = Channel::from_transport(endpoint, transport, JsonCodec);

    let request = TestMessage {
        id: 1,
        data: String::new(),
    };
    let result: Result<TestMessage, _> = channel.request(&request).await;

    assert!(matches!(result, Err(Error::Codec(_))));
}

#[tokio::test]
async fn channel_over_http() {
    let (url, server) = serve_once(200, r#"{"id":9,"data":"over http"}"#).await;

    let channel = Channel::http(url.parse().unwrap(), JsonCodec);
    let response: TestMessage = channel
        .request(&TestMessage {
            id: 3,
            data: "hello".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.id, 9);
    let request = server.await.unwrap();
    assert!(request.to_lowercase().contains("content-type: application/json"));
    assert!(request.ends_with(r#"{"id":3,"data":"hello"}"#));
}
