//! Wire models for the mocked bill.com API.
//!
//! Each entity has an input shape (what clients send inside the `data` form
//! field) and a record shape (the fully-populated object the mock returns).
//! Record structs enumerate every field of the real API schema so that
//! client-side deserialization can be exercised field-for-field.

mod actg_class;
mod bill;
mod session;
mod vendor;

pub use actg_class::ActgClassRecord;
pub use bill::{Bill, BillLineItem, BillLineItemRecord, BillRecord};
pub use session::Session;
pub use vendor::{Vendor, VendorRecord};

/// The 20-zero placeholder id used for every unset reference field.
pub const ZERO_ID: &str = "00000000000000000000";
