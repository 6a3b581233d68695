//! Request routing
//!
//! Exact-match lookup of the request path in a [`RouteTable`]; paths with no
//! registered handler fall through to the [`StaticFileResolver`].

pub mod static_files;

pub use static_files::{ResolveError, StaticFileResolver};

use crate::http::request::Request;
use crate::http::response::Response;
use std::collections::HashMap;
use thiserror::Error;

/// A page handler. Receives the parsed request and returns the response to
/// send; an `Err` drops the connection without a response.
pub type Handler = fn(&Request) -> anyhow::Result<Response>;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("handler for {path} failed")]
    Handler {
        path: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Mapping from exact path to handler. Built once at startup, then shared
/// read-only.
#[derive(Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, Handler>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `path`, replacing any earlier registration.
    pub fn route(mut self, path: impl Into<String>, handler: Handler) -> Self {
        self.routes.insert(path.into(), handler);
        self
    }

    pub fn get(&self, path: &str) -> Option<Handler> {
        self.routes.get(path).copied()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.routes.keys()).finish()
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    routes: RouteTable,
    static_files: StaticFileResolver,
}

impl Router {
    pub fn new(routes: RouteTable, static_files: StaticFileResolver) -> Self {
        Self {
            routes,
            static_files,
        }
    }

    /// Produces the response for `request`.
    ///
    /// A registered handler wins; otherwise the path is served from the static
    /// root, and any resolver failure becomes the fixed 404 page.
    pub async fn route(&self, request: &Request) -> Result<Response, RoutingError> {
        if let Some(handler) = self.routes.get(&request.path) {
            tracing::debug!(path = %request.path, "Dispatching to handler");
            return handler(request).map_err(|source| RoutingError::Handler {
                path: request.path.clone(),
                source,
            });
        }

        match self.static_files.resolve(&request.path).await {
            Ok(contents) => Ok(Response::file(contents)),
            Err(e @ ResolveError::Forbidden { .. }) => {
                tracing::warn!(path = %request.path, error = %e, "Rejected static path");
                Ok(Response::not_found())
            }
            Err(e) => {
                tracing::warn!(path = %request.path, error = %e, "Static file not found");
                Ok(Response::not_found())
            }
        }
    }
}
