//! PlainHttp - a minimal HTTP/1.1 server on raw TCP sockets
//!
//! Hand-written request parsing, exact-path routing with a static file
//! fallback, and response serialization.

pub mod config;
pub mod http;
pub mod router;
pub mod server;
pub mod views;
