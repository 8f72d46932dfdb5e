//! Tests for HTTP request/response types.

use super::{HttpRequest, HttpResponse};

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let url = url::Url::parse("https://example.com/api").unwrap();
        let req = HttpRequest::new(http::Method::PUT, url.clone());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, url);
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn get_creates_get_request() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::get(url);

        assert_eq!(req.method, http::Method::GET);
    }

    #[test]
    fn put_creates_put_request() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::put(url);

        assert_eq!(req.method, http::Method::PUT);
    }

    #[test]
    fn with_body_sets_body() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let body = br#"{"content":"1.2.3.4"}"#.to_vec();
        let req = HttpRequest::put(url).with_body(body.clone());

        assert_eq!(req.body, Some(body));
    }

    #[test]
    fn with_header_adds_single_header() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::get(url).with_header(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );

        assert_eq!(
            req.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn with_header_appends_multiple_values_for_same_name() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req = HttpRequest::get(url)
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/html"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }

    #[test]
    fn builder_pattern_chains_correctly() {
        let url = url::Url::parse("https://example.com/api").unwrap();
        let req = HttpRequest::put(url)
            .with_body(b"data".to_vec())
            .with_header(
                http::header::AUTHORIZATION,
                http::HeaderValue::from_static("Bearer token"),
            );

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.body, Some(b"data".to_vec()));
        assert!(req.headers.contains_key(http::header::AUTHORIZATION));
    }

    #[test]
    fn clone_creates_independent_copy() {
        let url = url::Url::parse("https://example.com/").unwrap();
        let req1 = HttpRequest::put(url).with_body(b"original".to_vec());
        let req2 = req1.clone();

        assert_eq!(req1.body, req2.body);
        assert_eq!(req1.method, req2.method);
    }
}

mod http_response {
    use super::*;

    #[test]
    fn new_creates_response_with_all_fields() {
        let status = http::StatusCode::OK;
        let headers = http::HeaderMap::new();
        let body = b"response body".to_vec();
        let resp = HttpResponse::new(status, headers, body.clone());

        assert_eq!(resp.status, http::StatusCode::OK);
        assert_eq!(resp.body, body);
    }

    #[test]
    fn is_success_true_for_2xx() {
        let resp = HttpResponse::new(http::StatusCode::OK, http::HeaderMap::new(), vec![]);
        assert!(resp.is_success());

        let resp = HttpResponse::new(http::StatusCode::CREATED, http::HeaderMap::new(), vec![]);
        assert!(resp.is_success());
    }

    #[test]
    fn is_success_false_for_4xx_and_5xx() {
        let resp = HttpResponse::new(http::StatusCode::FORBIDDEN, http::HeaderMap::new(), vec![]);
        assert!(!resp.is_success());

        let resp = HttpResponse::new(
            http::StatusCode::INTERNAL_SERVER_ERROR,
            http::HeaderMap::new(),
            vec![],
        );
        assert!(!resp.is_success());
    }

    #[test]
    fn body_text_returns_valid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            b"hello".to_vec(),
        );

        assert_eq!(resp.body_text(), Some("hello"));
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            vec![0xff, 0xfe],
        );

        assert_eq!(resp.body_text(), None);
    }
}
