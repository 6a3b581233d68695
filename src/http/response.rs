/// HTTP status codes the server can send.
///
/// The set is closed, so every status carried by a [`Response`] has a reason
/// phrase:
/// - `Ok` (200): Request successful
/// - `NotFound` (404): Route and static file both missing
/// - `MethodNotAllowed` (405): Handler refused the method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
}

/// Body sent with every 404.
pub const NOT_FOUND_BODY: &[u8] = b"<html><body><h1>404 Not Found</h1></body></html>";
/// Content type of the 404 page, trailing semicolon included.
pub const NOT_FOUND_CONTENT_TYPE: &str = "text/html;";
/// Body sent with every 405.
pub const METHOD_NOT_ALLOWED_BODY: &[u8] =
    b"<html><body><h1>405 Method Not Allowed</h1></body></html>";
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=UTF-8";

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// ```
    /// # use plainhttp::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
        }
    }

    /// Returns the reason phrase written after the code in the status line.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
        }
    }

    /// Looks up a numeric code. Codes outside the supported set yield `None`.
    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            200 => Some(StatusCode::Ok),
            404 => Some(StatusCode::NotFound),
            405 => Some(StatusCode::MethodNotAllowed),
            _ => None,
        }
    }
}

/// A response produced by a handler or by the static file resolver.
///
/// Fields are read-only once built. When `content_type` is `None` the writer
/// derives it from the request path's extension at serialization time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    content_type: Option<String>,
    body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// ```
/// # use plainhttp::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type("text/css")
///     .body(b"body {}".to_vec())
///     .build();
/// assert_eq!(response.content_type(), Some("text/css"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
            body: Vec::new(),
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            content_type: self.content_type,
            body: self.body,
        }
    }
}

impl Response {
    /// 200 OK with an HTML body.
    pub fn html(body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .content_type(HTML_CONTENT_TYPE)
            .body(body)
            .build()
    }

    /// 200 OK whose content type is left to the path extension.
    pub fn file(body: Vec<u8>) -> Self {
        ResponseBuilder::new(StatusCode::Ok).body(body).build()
    }

    /// The fixed 404 page.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound)
            .content_type(NOT_FOUND_CONTENT_TYPE)
            .body(NOT_FOUND_BODY)
            .build()
    }

    /// The fixed 405 page.
    pub fn method_not_allowed() -> Self {
        ResponseBuilder::new(StatusCode::MethodNotAllowed)
            .content_type(HTML_CONTENT_TYPE)
            .body(METHOD_NOT_ALLOWED_BODY)
            .build()
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
