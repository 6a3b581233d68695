use crate::http::request::{Method, Request};
use bytes::Bytes;
use std::collections::HashMap;
use thiserror::Error;

const CRLF: &[u8] = b"\r\n";
const BLANK_LINE: &[u8] = b"\r\n\r\n";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed request line")]
    MalformedRequestLine,
    #[error("malformed header block")]
    MalformedHeader,
}

/// Parses one request out of the bytes returned by a single socket read.
///
/// The split is purely structural: request line up to the first CRLF, header
/// block up to the first blank line, and everything after it is the body.
/// Method, version and path are not validated beyond being non-empty tokens.
/// The body is a slice of `buf`, not a copy.
pub fn parse_http_request(buf: &Bytes) -> Result<Request, ParseError> {
    let line_end = find(buf, CRLF).ok_or(ParseError::MalformedRequestLine)?;
    let (method, path, version) = parse_request_line(&buf[..line_end])?;

    let remain_start = line_end + CRLF.len();
    let remain = &buf[remain_start..];

    // An empty header block leaves the blank line's second CRLF at the start.
    let (header_bytes, body_start) = if remain.starts_with(CRLF) {
        (&remain[..0], remain_start + CRLF.len())
    } else {
        let headers_end = find(remain, BLANK_LINE).ok_or(ParseError::MalformedHeader)?;
        (&remain[..headers_end], remain_start + headers_end + BLANK_LINE.len())
    };

    let headers = parse_headers(header_bytes)?;

    Ok(Request {
        method: Method::from_token(method),
        path: path.to_string(),
        version: version.to_string(),
        headers,
        body: buf.slice(body_start..),
    })
}

fn parse_request_line(line: &[u8]) -> Result<(&str, &str, &str), ParseError> {
    let line = std::str::from_utf8(line).map_err(|_| ParseError::MalformedRequestLine)?;

    let mut parts = line.split(' ');
    let (Some(method), Some(path), Some(version), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(ParseError::MalformedRequestLine);
    };

    if method.is_empty() || path.is_empty() || version.is_empty() {
        return Err(ParseError::MalformedRequestLine);
    }

    Ok((method, path, version))
}

fn parse_headers(block: &[u8]) -> Result<HashMap<String, String>, ParseError> {
    let mut headers = HashMap::new();
    if block.is_empty() {
        return Ok(headers);
    }

    let block = std::str::from_utf8(block).map_err(|_| ParseError::MalformedHeader)?;

    for line in block.split("\r\n") {
        let (key, value) = line.split_once(':').ok_or(ParseError::MalformedHeader)?;
        headers.insert(key.to_string(), value.trim_start_matches(' ').to_string());
    }

    Ok(headers)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|w| w == needle)
}
