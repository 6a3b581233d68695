//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 server: one request per connection, read in
//! a single receive call, answered with `Connection: Close`.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection state machine, read to close
//! - **`parser`**: Splits one received buffer into a `Request`
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response representation and status codes
//! - **`writer`**: Serializes a response to wire bytes and writes it out
//! - **`mime`**: Content type lookup by file extension
//!
//! # Connection State Machine
//!
//! ```text
//!   Reading ──► Parsing ──► Routing ──► BuildingResponse ──► Writing
//!      │           │           │                 │               │
//!      └───────────┴───────────┴──── error ──────┴───────────────┤
//!                                                                ▼
//!                                                             Closing ──► Closed
//! ```
//!
//! Any failure skips the remaining states and goes to `Closing` without a
//! response; `Closing` always runs, so the socket is shut down exactly once.
//!
//! # Example
//!
//! ```no_run
//! use plainhttp::config::Config;
//! use plainhttp::router::RouteTable;
//! use plainhttp::server::Listener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::default();
//!     Listener::bind(&cfg, RouteTable::new()).await?.run().await
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
pub mod mime;
