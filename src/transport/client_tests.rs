//! Tests for `ReqwestClient`.
//!
//! Request translation and error mapping are exercised against a minimal
//! local HTTP server; nothing here talks to the real echo or DNS
//! endpoints.

use super::{HttpClient, HttpError, HttpRequest, ReqwestClient};

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::mpsc;
use std::time::Duration;

/// Serves exactly one connection: captures the raw request bytes, then
/// writes the canned response and closes.
fn spawn_server(response: &'static str) -> (SocketAddr, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).unwrap();
            raw.extend_from_slice(&buf[..n]);
            if n == 0 || request_complete(&raw) {
                break;
            }
        }
        tx.send(String::from_utf8_lossy(&raw).into_owned()).unwrap();
        stream.write_all(response.as_bytes()).unwrap();
    });

    (addr, rx)
}

/// A request is complete once the header block has arrived plus as many
/// body bytes as its Content-Length announced.
fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some((head, body)) = text.split_once("\r\n\r\n") else {
        return false;
    };
    let announced = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    body.len() >= announced
}

/// Client that ignores any proxy configured in the environment, so the
/// local-server tests observe real connection behavior.
fn direct_client() -> ReqwestClient {
    ReqwestClient::from_client(reqwest::Client::builder().no_proxy().build().unwrap())
}

fn local_url(addr: SocketAddr, path: &str) -> url::Url {
    url::Url::parse(&format!("http://{addr}{path}")).unwrap()
}

mod request_translation {
    use super::*;

    #[tokio::test]
    async fn get_sends_path_and_headers() {
        let (addr, rx) = spawn_server(
            "HTTP/1.1 200 OK\r\nContent-Length: 24\r\nConnection: close\r\n\r\n{\"origin\":\"203.0.113.5\"}",
        );

        let request = HttpRequest::get(local_url(addr, "/ip")).with_header(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        let response = direct_client().request(request).await.unwrap();

        assert!(response.is_success());
        assert_eq!(response.body_text(), Some(r#"{"origin":"203.0.113.5"}"#));

        let captured = rx.recv().unwrap();
        assert!(captured.starts_with("GET /ip HTTP/1.1"));
        assert!(
            captured
                .to_ascii_lowercase()
                .contains("content-type: application/json")
        );
    }

    #[tokio::test]
    async fn put_carries_authorization_and_json_body() {
        let (addr, rx) = spawn_server(
            "HTTP/1.1 200 OK\r\nContent-Length: 16\r\nConnection: close\r\n\r\n{\"success\":true}",
        );

        let request = HttpRequest::put(local_url(addr, "/client/v4/zones/z/dns_records/r"))
            .with_header(
                http::header::AUTHORIZATION,
                http::HeaderValue::from_static("Bearer secret-token"),
            )
            .with_body(br#"{"content":"203.0.113.9"}"#.to_vec());
        let response = direct_client().request(request).await.unwrap();

        assert!(response.is_success());

        let captured = rx.recv().unwrap();
        assert!(captured.starts_with("PUT /client/v4/zones/z/dns_records/r HTTP/1.1"));
        assert!(
            captured
                .to_ascii_lowercase()
                .contains("authorization: bearer secret-token")
        );
        assert!(captured.ends_with(r#"{"content":"203.0.113.9"}"#));
    }

    #[tokio::test]
    async fn non_success_status_is_a_response_not_an_error() {
        let (addr, _rx) = spawn_server(
            "HTTP/1.1 403 Forbidden\r\nContent-Length: 17\r\nConnection: close\r\n\r\n{\"success\":false}",
        );

        let response = direct_client()
            .request(HttpRequest::get(local_url(addr, "/ip")))
            .await
            .unwrap();

        // Rejections must surface as statuses for the callers to classify.
        assert_eq!(response.status, http::StatusCode::FORBIDDEN);
        assert_eq!(response.body_text(), Some(r#"{"success":false}"#));
    }
}

mod error_mapping {
    use super::*;

    #[tokio::test]
    async fn refused_connection_maps_to_connection_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = direct_client()
            .request(HttpRequest::get(local_url(addr, "/ip")))
            .await;

        assert!(matches!(result, Err(HttpError::Connection(_))));
    }

    #[tokio::test]
    async fn silent_server_maps_to_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            std::thread::sleep(Duration::from_secs(2));
            drop(stream);
        });

        let client = ReqwestClient::from_client(
            reqwest::Client::builder()
                .no_proxy()
                .timeout(Duration::from_millis(100))
                .build()
                .unwrap(),
        );
        let result = client
            .request(HttpRequest::get(local_url(addr, "/ip")))
            .await;

        assert!(matches!(result, Err(HttpError::Timeout)));
    }
}

mod construction {
    use super::*;

    #[test]
    fn default_matches_new() {
        let _ = format!("{:?}", ReqwestClient::new());
        let _ = format!("{:?}", ReqwestClient::default());
    }

    #[test]
    fn shared_use_bounds_hold() {
        // One client is cloned into both the discovery and DNS clients
        // and driven from the async runtime.
        fn assert_bounds<T: HttpClient + Clone>() {}
        assert_bounds::<ReqwestClient>();
    }
}
