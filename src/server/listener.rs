use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{Instrument, error, info, info_span};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::router::RouteTable;
use crate::server::ServerContext;

/// Pause after a failed `accept` so a persistent error such as EMFILE does
/// not spin the loop.
pub const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

pub struct Listener {
    listener: TcpListener,
    ctx: Arc<ServerContext>,
}

impl Listener {
    /// Binds the configured address with `SO_REUSEADDR` and the configured
    /// backlog. Host names are resolved; an IPv4 address is preferred.
    pub async fn bind(cfg: &Config, routes: RouteTable) -> anyhow::Result<Self> {
        let resolved = tokio::net::lookup_host(&cfg.server.listen_addr)
            .await
            .with_context(|| format!("resolving {}", cfg.server.listen_addr))?;
        let addr = pick_addr(resolved)
            .with_context(|| format!("no address for {}", cfg.server.listen_addr))?;

        let socket = match addr {
            SocketAddr::V4(_) => TcpSocket::new_v4()?,
            SocketAddr::V6(_) => TcpSocket::new_v6()?,
        };
        socket.set_reuseaddr(true)?;
        socket
            .bind(addr)
            .with_context(|| format!("binding {}", addr))?;
        let listener = socket.listen(cfg.server.backlog)?;

        Ok(Self {
            listener,
            ctx: Arc::new(ServerContext::new(cfg, routes)),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections forever, spawning one task per connection and
    /// returning to `accept` immediately. A failed accept is logged and
    /// does not stop the loop.
    pub async fn run(self) -> anyhow::Result<()> {
        info!("Listening on {}", self.local_addr()?);

        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!("Accept failed: {}", e);
                    tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                    continue;
                }
            };
            info!("Accepted connection from {}", peer);

            let conn = Connection::new(socket, peer, Arc::clone(&self.ctx));
            tokio::spawn(conn.run().instrument(info_span!("conn", %peer)));
        }
    }
}

/// First IPv4 address, or the first address of any family.
pub fn pick_addr(addrs: impl IntoIterator<Item = SocketAddr>) -> Option<SocketAddr> {
    let mut first = None;
    for addr in addrs {
        if addr.is_ipv4() {
            return Some(addr);
        }
        first.get_or_insert(addr);
    }
    first
}

/// Binds per `cfg` and serves until the process stops.
pub async fn run(cfg: &Config, routes: RouteTable) -> anyhow::Result<()> {
    Listener::bind(cfg, routes).await?.run().await
}
