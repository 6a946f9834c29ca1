//! Mock bill.com API server.
//!
//! An axum-based HTTP server that answers the bill.com v2 API with
//! fabricated records. Nothing persists between requests; every handler
//! shapes its response from the request alone.
//!
//! # Example
//!
//! ```ignore
//! use billmock::MockServer;
//!
//! #[tokio::main]
//! async fn main() -> billmock::Result<()> {
//!     let server = MockServer::new("127.0.0.1", 0);
//!     let addr = server.start().await?;
//!     println!("mock API at http://{addr}/api/v2");
//!     server.shutdown().await;
//!     Ok(())
//! }
//! ```

mod extract;
mod handlers;
#[allow(clippy::module_inception)]
mod server;

pub use extract::FormData;
pub use server::MockServer;
