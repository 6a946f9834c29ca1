//! Mock bill.com API server library.
//!
//! A deterministic stand-in for the bill.com v2 REST API, used to exercise
//! client integrations without touching the real service. Every endpoint
//! fabricates a plausible record from the request alone: there is no
//! persistence, no authentication, and no validation beyond decoding the
//! request shape.
//!
//! # Quick Start
//!
//! ```no_run
//! use billmock::MockServer;
//!
//! #[tokio::main]
//! async fn main() -> billmock::Result<()> {
//!     let server = MockServer::new("127.0.0.1", 0);
//!     let addr = server.start().await?;
//!
//!     // point the client under test at http://{addr}/api/v2 ...
//!
//!     server.shutdown().await;
//!     Ok(())
//! }
//! ```
//!
//! # Wire convention
//!
//! All API operations are POSTs of `application/x-www-form-urlencoded`
//! bodies carrying a single `data` field with a JSON document, and every
//! JSON response is wrapped in the same [`Envelope`]. A GET `/ping`
//! health check sits outside the versioned namespace.

pub mod cli;
pub mod envelope;
pub mod error;
pub mod fixtures;
pub mod ident;
pub mod models;
pub mod server;

pub use envelope::Envelope;
pub use error::{MockError, Result};
pub use fixtures::Fixtures;
pub use ident::{random_id, ALPHABET};
pub use models::{
    ActgClassRecord, Bill, BillLineItem, BillLineItemRecord, BillRecord, Session, Vendor,
    VendorRecord, ZERO_ID,
};
pub use server::MockServer;
