use bytes::{BufMut, Bytes, BytesMut};
use std::time::SystemTime;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::mime::MimeTypes;
use crate::http::request::Request;
use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Turns a [`Response`] plus the request it answers into wire bytes.
///
/// Header set and order are fixed: `Date`, `Host`, `Content-Length`,
/// `Connection`, `Content-Type`.
#[derive(Debug, Clone)]
pub struct ResponseSerializer {
    server_name: String,
    mime_types: MimeTypes,
}

impl ResponseSerializer {
    /// `server_name` is the value written in the `Host` header.
    pub fn new(server_name: impl Into<String>, mime_types: MimeTypes) -> Self {
        Self {
            server_name: server_name.into(),
            mime_types,
        }
    }

    /// The response's own content type, or the one implied by the request
    /// path's extension.
    pub fn content_type<'a>(&'a self, resp: &'a Response, req: &Request) -> &'a str {
        match resp.content_type() {
            Some(content_type) => content_type,
            None => self.mime_types.lookup(req.extension()),
        }
    }

    pub fn serialize(&self, resp: &Response, req: &Request, now: SystemTime) -> Bytes {
        let content_type = self.content_type(resp, req);
        let body = resp.body();

        let head = format!(
            "{} {} {}\r\n\
             Date: {}\r\n\
             Host: {}\r\n\
             Content-Length: {}\r\n\
             Connection: Close\r\n\
             Content-Type: {}\r\n\
             \r\n",
            HTTP_VERSION,
            resp.status().as_u16(),
            resp.status().reason_phrase(),
            httpdate::fmt_http_date(now),
            self.server_name,
            body.len(),
            content_type,
        );

        let mut buf = BytesMut::with_capacity(head.len() + body.len());
        buf.put_slice(head.as_bytes());
        buf.put_slice(body);
        buf.freeze()
    }
}

pub struct ResponseWriter {
    buffer: Bytes,
    written: usize,
}

impl ResponseWriter {
    pub fn new(buffer: Bytes) -> Self {
        Self { buffer, written: 0 }
    }

    pub async fn write_to_stream(
        &mut self,
        stream: &mut TcpStream,
    ) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream
                .write(&self.buffer[self.written..])
                .await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
