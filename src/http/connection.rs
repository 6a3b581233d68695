use std::net::SocketAddr;
use std::sync::Arc;
use std::time::SystemTime;

use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::http::parser::parse_http_request;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::server::ServerContext;

/// Handles one accepted socket from first read to close.
pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
    ctx: Arc<ServerContext>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Parsing(Bytes),
    Routing(Request),
    BuildingResponse(Request, Response),
    Writing(ResponseWriter),
    Closing,
    Closed,
}

impl Connection {
    pub fn new(stream: TcpStream, peer: SocketAddr, ctx: Arc<ServerContext>) -> Self {
        Self {
            stream,
            peer,
            ctx,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the state machine to `Closed`.
    ///
    /// A failure in any state is logged and moves straight to `Closing`; no
    /// response is written for it. `Closing` runs on every path.
    pub async fn run(mut self) {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::Closed => break,

                ConnectionState::Closing => {
                    self.close().await;
                    ConnectionState::Closed
                }

                active => match self.step(active).await {
                    Ok(next) => next,
                    Err(e) => {
                        tracing::error!(peer = %self.peer, "Request handling failed: {:#}", e);
                        ConnectionState::Closing
                    }
                },
            };
        }
    }

    async fn step(&mut self, state: ConnectionState) -> anyhow::Result<ConnectionState> {
        let next = match state {
            ConnectionState::Reading => match self.read_request().await? {
                Some(buf) => ConnectionState::Parsing(buf),
                None => {
                    tracing::debug!(peer = %self.peer, "Client closed before sending a request");
                    ConnectionState::Closing
                }
            },

            ConnectionState::Parsing(buf) => match parse_http_request(&buf) {
                Ok(request) => ConnectionState::Routing(request),
                Err(e) => {
                    tracing::warn!(peer = %self.peer, error = %e, "Dropping malformed request");
                    ConnectionState::Closing
                }
            },

            ConnectionState::Routing(request) => {
                let response = self.ctx.router.route(&request).await?;
                ConnectionState::BuildingResponse(request, response)
            }

            ConnectionState::BuildingResponse(request, response) => {
                let bytes = self
                    .ctx
                    .serializer
                    .serialize(&response, &request, SystemTime::now());

                tracing::info!(
                    peer = %self.peer,
                    method = %request.method,
                    path = %request.path,
                    status = response.status().as_u16(),
                    "Responding"
                );

                ConnectionState::Writing(ResponseWriter::new(bytes))
            }

            ConnectionState::Writing(mut writer) => {
                writer.write_to_stream(&mut self.stream).await?;
                ConnectionState::Closing
            }

            // Terminal states belong to `run`; hand them back untouched.
            done @ (ConnectionState::Closing | ConnectionState::Closed) => done,
        };

        Ok(next)
    }

    /// Performs the single read a request gets. `None` means the peer closed
    /// without sending anything.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Bytes>> {
        let mut buf = BytesMut::zeroed(self.ctx.read_buffer_size);
        let n = self.stream.read(&mut buf).await?;

        if n == 0 {
            return Ok(None);
        }

        buf.truncate(n);
        let buf = buf.freeze();

        if let Some(path) = &self.ctx.request_dump {
            if let Err(e) = tokio::fs::write(path, &buf).await {
                tracing::warn!(path = %path.display(), error = %e, "Could not dump request");
            }
        }

        Ok(Some(buf))
    }

    async fn close(&mut self) {
        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!(peer = %self.peer, error = %e, "Shutdown failed");
        }
        tracing::debug!(peer = %self.peer, "Connection closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::router::RouteTable;
    use tokio::net::TcpListener;

    async fn connection() -> (Connection, TcpStream) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let client = TcpStream::connect(listener.local_addr().unwrap()).await.unwrap();
        let (socket, peer) = listener.accept().await.unwrap();
        let ctx = Arc::new(ServerContext::new(&Config::default(), RouteTable::new()));
        (Connection::new(socket, peer, ctx), client)
    }

    #[tokio::test]
    async fn step_leaves_terminal_states_alone() {
        let (mut conn, _client) = connection().await;

        let next = conn.step(ConnectionState::Closed).await.unwrap();
        assert!(matches!(next, ConnectionState::Closed));

        let next = conn.step(ConnectionState::Closing).await.unwrap();
        assert!(matches!(next, ConnectionState::Closing));
    }

    #[tokio::test]
    async fn run_closes_after_malformed_request() {
        let (conn, mut client) = connection().await;
        client.write_all(b"GARBAGE\r\n\r\n").await.unwrap();

        conn.run().await;

        let mut response = Vec::new();
        client.read_to_end(&mut response).await.unwrap();
        assert!(response.is_empty());
    }
}
