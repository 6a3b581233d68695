//! Tests for path routing and the static fallback

use plainhttp::http::request::{Method, Request, RequestBuilder};
use plainhttp::http::response::{NOT_FOUND_BODY, Response, StatusCode};
use plainhttp::router::{RouteTable, Router, RoutingError, StaticFileResolver};
use std::fs;
use tempfile::TempDir;

fn hello(_req: &Request) -> anyhow::Result<Response> {
    Ok(Response::html("hello"))
}

fn echo_method(req: &Request) -> anyhow::Result<Response> {
    Ok(Response::html(req.method.to_string()))
}

fn broken(_req: &Request) -> anyhow::Result<Response> {
    anyhow::bail!("template missing")
}

fn request(method: Method, path: &str) -> Request {
    RequestBuilder::new().method(method).path(path).build().unwrap()
}

fn router() -> (TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), b"<h1>static</h1>").unwrap();
    fs::write(dir.path().join("hello"), b"shadowed").unwrap();

    let routes = RouteTable::new()
        .route("/hello", hello)
        .route("/method", echo_method)
        .route("/broken", broken);
    let router = Router::new(routes, StaticFileResolver::new(dir.path()));
    (dir, router)
}

#[tokio::test]
async fn test_registered_route_wins_over_static_file() {
    let (_dir, router) = router();

    let response = router.route(&request(Method::GET, "/hello")).await.unwrap();
    assert_eq!(response.body(), b"hello");
}

#[tokio::test]
async fn test_handler_reads_the_request() {
    let (_dir, router) = router();

    let response = router
        .route(&request(Method::Extension("BREW".into()), "/method"))
        .await
        .unwrap();
    assert_eq!(response.body(), b"BREW");
}

#[tokio::test]
async fn test_lookup_is_verbatim() {
    let (_dir, router) = router();

    // "/hello/" is not "/hello" and has no file behind it.
    let response = router.route(&request(Method::GET, "/hello/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NotFound);

    let response = router.route(&request(Method::GET, "/hello?x=1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NotFound);
}

#[tokio::test]
async fn test_falls_back_to_static_files() {
    let (_dir, router) = router();

    let response = router.route(&request(Method::GET, "/index.html")).await.unwrap();
    assert_eq!(response.status(), StatusCode::Ok);
    assert_eq!(response.content_type(), None);
    assert_eq!(response.body(), b"<h1>static</h1>");
}

#[tokio::test]
async fn test_missing_static_file_is_404() {
    let (_dir, router) = router();

    let response = router.route(&request(Method::GET, "/missing.xyz")).await.unwrap();
    assert_eq!(response, Response::not_found());
    assert_eq!(response.body(), NOT_FOUND_BODY);
}

#[tokio::test]
async fn test_traversal_is_404() {
    let (_dir, router) = router();

    let response = router.route(&request(Method::GET, "/../etc/passwd")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NotFound);
}

#[tokio::test]
async fn test_handler_failure_is_routing_error() {
    let (_dir, router) = router();

    let err = router.route(&request(Method::GET, "/broken")).await.unwrap_err();
    let RoutingError::Handler { path, source } = err;
    assert_eq!(path, "/broken");
    assert_eq!(source.to_string(), "template missing");
}

#[test]
fn test_route_table_replaces_duplicates() {
    let routes = RouteTable::new().route("/a", hello).route("/a", broken);

    assert_eq!(routes.len(), 1);
    let handler = routes.get("/a").unwrap();
    assert!(handler(&request(Method::GET, "/a")).is_err());
    assert!(routes.get("/b").is_none());
}
