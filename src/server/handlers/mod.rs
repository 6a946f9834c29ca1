//! HTTP request handlers for the mock server.

pub mod actg_classes;
pub mod bills;
pub mod session;
pub mod vendors;

pub use actg_classes::*;
pub use bills::*;
pub use session::*;
pub use vendors::*;

use serde::Deserialize;

/// `{"id": "..."}` payload used by read and delete operations.
#[derive(Debug, Deserialize)]
pub struct ReadRequest {
    #[serde(default)]
    pub id: String,
}

/// `{"obj": {...}}` payload used by create and update operations.
#[derive(Debug, Deserialize)]
pub struct WriteRequest<T> {
    pub obj: T,
}

/// `{"filters": [{"value": "..."}]}` payload used by search operations.
#[derive(Debug, Deserialize)]
pub struct ListRequest {
    #[serde(default)]
    pub filters: Vec<Filter>,
}

/// One entry of a search's filter list.
#[derive(Debug, Deserialize)]
pub struct Filter {
    pub value: String,
}
