//! Listening socket and the state shared by every connection.

pub mod listener;

pub use listener::Listener;

use std::path::PathBuf;

use crate::config::Config;
use crate::http::writer::ResponseSerializer;
use crate::router::{RouteTable, Router, StaticFileResolver};

/// Immutable per-server state, shared by reference with each connection.
#[derive(Debug)]
pub struct ServerContext {
    pub router: Router,
    pub serializer: ResponseSerializer,
    pub read_buffer_size: usize,
    pub request_dump: Option<PathBuf>,
}

impl ServerContext {
    pub fn new(cfg: &Config, routes: RouteTable) -> Self {
        Self {
            router: Router::new(routes, StaticFileResolver::new(&cfg.static_files.root)),
            serializer: ResponseSerializer::new(&cfg.server.server_name, cfg.mime_types()),
            read_buffer_size: cfg.server.read_buffer_size,
            request_dump: cfg.request_dump.clone(),
        }
    }
}
