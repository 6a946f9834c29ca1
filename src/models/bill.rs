//! Bill and bill line-item models.

use serde::{Deserialize, Serialize};

/// Bill fields a client may supply under the `obj` key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bill {
    pub id: String,
    pub vendor_id: String,
    pub description: String,
    pub invoice_date: String,
    pub invoice_number: String,
    pub due_date: String,
    pub bill_line_items: Vec<BillLineItem>,
}

/// One accounting allocation on a bill, as supplied by the client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillLineItem {
    pub id: String,
    pub chart_of_account_id: String,
    pub bill_id: String,
    pub amount: f64,
    pub actg_class_id: String,
    pub quantity: i32,
}

/// A fully-populated bill record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillRecord {
    pub vendor_id: String,
    pub invoice_date: String,
    pub due_amount: f64,
    pub entity: String,
    pub payment_term_id: String,
    pub has_auto_pay: bool,
    pub paid_amount: String,
    pub due_date: String,
    pub local_amount: String,
    pub gl_posting_date: String,
    pub approval_status: String,
    pub id: String,
    pub po_number: String,
    pub bill_line_items: Vec<BillLineItemRecord>,
    pub pay_from_bank_account_id: String,
    pub description: String,
    pub exchange_rate: String,
    pub invoice_number: String,
    pub is_active: String,
    pub updated_time: String,
    #[serde(rename = "eBillCreated")]
    pub e_bill_created: bool,
    pub scheduled_amount: f64,
    pub payment_status: String,
    pub amount: f64,
    pub created_time: String,
    pub pay_from_chart_of_account_id: String,
}

/// A fully-populated bill line-item record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillLineItemRecord {
    pub item_id: String,
    pub updated_time: String,
    pub description: String,
    pub chart_of_account_id: String,
    pub bill_id: String,
    pub entity: String,
    pub customer_id: String,
    pub employee_id: String,
    pub amount: f64,
    pub location_id: String,
    pub department_id: String,
    pub line_type: String,
    pub job_billable: bool,
    pub created_time: String,
    pub actg_class_id: String,
    pub job_id: String,
    pub unit_price: String,
    pub id: String,
    pub quantity: i32,
}
