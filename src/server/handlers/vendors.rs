//! Vendor endpoint handlers.

use axum::Json;

use super::{ReadRequest, WriteRequest};
use crate::envelope::Envelope;
use crate::fixtures::Fixtures;
use crate::ident::random_id;
use crate::models::{Vendor, VendorRecord};
use crate::server::extract::FormData;

/// POST /api/v2/List/Vendor.json
///
/// Ignores its input and returns an empty search result.
pub async fn list_vendors() -> Json<Envelope<Vec<VendorRecord>>> {
    Json(Envelope::success(Vec::new()))
}

/// POST /api/v2/Crud/Read/Vendor.json
///
/// No lookup happens; a vendor with fixed name and email is fabricated
/// under the supplied id.
pub async fn read_vendor(FormData(req): FormData<ReadRequest>) -> Json<Envelope<VendorRecord>> {
    let vendor = Vendor {
        id: req.id,
        name: "Test Vendor".to_string(),
        email: "fake@mail.com".to_string(),
        ..Vendor::default()
    };
    Json(Envelope::success(Fixtures::vendor_record(vendor)))
}

/// POST /api/v2/Crud/Create/Vendor.json
///
/// Replaces any caller-supplied id with a fresh one before shaping.
pub async fn create_vendor(
    FormData(mut req): FormData<WriteRequest<Vendor>>,
) -> Json<Envelope<VendorRecord>> {
    req.obj.id = random_id(20);
    Json(Envelope::success(Fixtures::vendor_record(req.obj)))
}

/// POST /api/v2/Crud/Update/Vendor.json
pub async fn update_vendor(
    FormData(req): FormData<WriteRequest<Vendor>>,
) -> Json<Envelope<VendorRecord>> {
    Json(Envelope::success(Fixtures::vendor_record(req.obj)))
}
