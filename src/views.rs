//! Demo page handlers served by the binary.

use std::collections::BTreeMap;
use std::time::SystemTime;

use html_escape::encode_text;

use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::router::RouteTable;

/// Route table with every demo page registered.
pub fn routes() -> RouteTable {
    RouteTable::new()
        .route("/now", now)
        .route("/show_request", show_request)
        .route("/parameters", parameters)
}

/// Current time.
pub fn now(_request: &Request) -> anyhow::Result<Response> {
    let html = format!(
        "<html>\n<body>\n  <h1>Now: {}</h1>\n</body>\n</html>\n",
        httpdate::fmt_http_date(SystemTime::now())
    );
    Ok(Response::html(html))
}

/// Echoes the request line, headers and body back as HTML.
pub fn show_request(request: &Request) -> anyhow::Result<Response> {
    let headers: BTreeMap<&str, &str> = request
        .headers
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    let html = format!(
        "<html>\n<body>\n  <h1>Request Line:</h1>\n  <p>\n    {} {} {}\n  </p>\n  \
         <h1>Headers:</h1>\n  <pre>{}</pre>\n  <h1>Body:</h1>\n  <pre>{}</pre>\n</body>\n</html>\n",
        encode_text(request.method.as_str()),
        encode_text(&request.path),
        encode_text(&request.version),
        encode_text(&format!("{:#?}", headers)),
        encode_text(&String::from_utf8_lossy(&request.body)),
    );
    Ok(Response::html(html))
}

/// Lists the form parameters of a POST body; other methods get 405.
pub fn parameters(request: &Request) -> anyhow::Result<Response> {
    if request.method != Method::POST {
        return Ok(Response::method_not_allowed());
    }

    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in url::form_urlencoded::parse(&request.body) {
        params.entry(name.into_owned()).or_default().push(value.into_owned());
    }

    let html = format!(
        "<html>\n<body>\n  <h1>Parameters:</h1>\n  <pre>{}</pre>\n</body>\n</html>\n",
        encode_text(&format!("{:#?}", params)),
    );
    Ok(Response::html(html))
}
