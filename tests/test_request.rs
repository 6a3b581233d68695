use plainhttp::http::request::{Method, Request, RequestBuilder};
use std::collections::HashMap;

fn request_for(path: &str) -> Request {
    Request {
        method: Method::GET,
        path: path.to_string(),
        version: "HTTP/1.1".to_string(),
        headers: HashMap::new(),
        body: Default::default(),
    }
}

#[test]
fn test_request_header_retrieval() {
    let mut headers = HashMap::new();
    headers.insert("Host".to_string(), "example.com".to_string());
    headers.insert("Content-Type".to_string(), "application/json".to_string());

    let req = Request {
        headers,
        ..request_for("/")
    };

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_extension() {
    assert_eq!(request_for("/index.html").extension(), "html");
    assert_eq!(request_for("/a.b/c.PNG").extension(), "PNG");
    assert_eq!(request_for("/archive.tar.gz").extension(), "gz");
    assert_eq!(request_for("/now").extension(), "");
    assert_eq!(request_for("/trailing.").extension(), "");
}

#[test]
fn test_method_display_round_trip() {
    for token in ["GET", "POST", "PUT", "DELETE", "HEAD", "OPTIONS", "PATCH", "PURGE"] {
        assert_eq!(Method::from_token(token).to_string(), token);
    }
}

#[test]
fn test_request_builder() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/parameters")
        .header("Host", "localhost")
        .body(&b"a=1"[..])
        .build()
        .unwrap();

    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, "/parameters");
    assert_eq!(req.version, "HTTP/1.1");
    assert_eq!(req.header("Host"), Some("localhost"));
    assert_eq!(req.body, &b"a=1"[..]);
}

#[test]
fn test_request_builder_requires_method_and_path() {
    assert!(RequestBuilder::new().path("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).path("").build().is_err());
}
