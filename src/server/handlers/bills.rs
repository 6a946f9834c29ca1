//! Bill endpoint handlers.

use axum::Json;
use rand::Rng;

use super::{ReadRequest, WriteRequest};
use crate::envelope::Envelope;
use crate::error::{MockError, Result};
use crate::fixtures::Fixtures;
use crate::ident::random_id;
use crate::models::{Bill, BillLineItem, BillRecord};
use crate::server::extract::FormData;

/// POST /api/v2/Crud/Read/Bill.json and /api/v2/Crud/Delete/Bill.json
///
/// Fabricates a bill under the supplied id with one random line item;
/// delete is not distinguished from read.
pub async fn read_bill(FormData(req): FormData<ReadRequest>) -> Json<Envelope<BillRecord>> {
    let amount = rand::rng().random_range(0..1000) as f64;
    let bill = Bill {
        id: req.id.clone(),
        vendor_id: random_id(20),
        description: "Test".to_string(),
        invoice_date: "2010-01-01".to_string(),
        invoice_number: "Test_Jan_01".to_string(),
        due_date: "2010-01-01".to_string(),
        bill_line_items: vec![BillLineItem {
            id: random_id(20),
            chart_of_account_id: random_id(20),
            bill_id: req.id,
            amount,
            actg_class_id: random_id(20),
            quantity: 1,
        }],
    };
    // one line item is always present, the shaper cannot come back empty
    let record = Fixtures::bill_record(bill).expect("fabricated bill has a line item");
    Json(Envelope::success(record))
}

/// POST /api/v2/Crud/Create/Bill.json
///
/// Fresh ids for the bill and its first line item before shaping.
pub async fn create_bill(
    FormData(mut req): FormData<WriteRequest<Bill>>,
) -> Result<Json<Envelope<BillRecord>>> {
    req.obj.id = random_id(20);
    regenerate_first_line_id(&mut req.obj)?;
    shape(req.obj)
}

/// POST /api/v2/Crud/Update/Bill.json
///
/// The bill keeps its id, but the first line item's id is regenerated
/// even on update.
pub async fn update_bill(
    FormData(mut req): FormData<WriteRequest<Bill>>,
) -> Result<Json<Envelope<BillRecord>>> {
    regenerate_first_line_id(&mut req.obj)?;
    shape(req.obj)
}

fn regenerate_first_line_id(bill: &mut Bill) -> Result<()> {
    let first = bill
        .bill_line_items
        .first_mut()
        .ok_or_else(|| MockError::InvalidShape("bill has no line items".to_string()))?;
    first.id = random_id(20);
    Ok(())
}

fn shape(bill: Bill) -> Result<Json<Envelope<BillRecord>>> {
    let record = Fixtures::bill_record(bill)
        .ok_or_else(|| MockError::InvalidShape("bill has no line items".to_string()))?;
    Ok(Json(Envelope::success(record)))
}
