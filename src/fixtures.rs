//! Entity shapers for the mock server.
//!
//! Provides factory functions that take the handful of fields a request
//! supplies and expand them into the fully-populated records the real
//! bill.com API returns. Every function here is pure: all random ids are
//! generated by the callers and passed in, so a shaper's output is
//! determined by its inputs and the current timestamp.

use chrono::Utc;

use crate::models::{
    ActgClassRecord, Bill, BillLineItemRecord, BillRecord, Vendor, VendorRecord, ZERO_ID,
};

/// Accounting-class records carry this fixed timestamp, not the current time.
const ACTG_CLASS_TIME: &str = "2019-01-30T08:05:20.000+0000";

/// Format of every generated record timestamp, e.g. `2019-01-30T08:05:20.000+0000`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

/// Current UTC time in the API's textual timestamp format.
///
/// Each shaper call computes its own "now"; nothing pins it to request time.
fn record_timestamp() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Collection of shaper factories for mock records.
pub struct Fixtures;

impl Fixtures {
    /// Expand vendor input into a full vendor record.
    ///
    /// Identity and address fields pass through; every other business field
    /// gets its fixed placeholder.
    pub fn vendor_record(item: Vendor) -> VendorRecord {
        let now = record_timestamp();
        VendorRecord {
            send_notifications: true,
            merged_into_id: ZERO_ID.to_string(),
            tax_id: String::new(),
            entity: "Vendor".to_string(),
            payment_email: String::new(),
            payment_term_id: ZERO_ID.to_string(),
            has_bank_account_auto_pay: false,
            payment_currency: String::new(),
            bank_country: String::new(),
            id: item.id,
            acc_number: String::new(),
            payment_phone: item.phone.clone(),
            payment_purpose: String::new(),
            since: String::new(),
            pay_days_before: String::new(),
            address_country: item.address_country,
            bill_sync_pref: "0".to_string(),
            is_active: "1".to_string(),
            track1099: true,
            name_on_check: String::new(),
            fax: String::new(),
            description: String::new(),
            bill_currency: String::new(),
            company_name: String::new(),
            pay_by: "0".to_string(),
            address1: item.address1,
            address2: String::new(),
            address3: String::new(),
            address4: String::new(),
            phone: item.phone,
            contact_last_name: String::new(),
            account_type: "0".to_string(),
            enabled_combine_payments: true,
            short_name: String::new(),
            external_bill_pay_in_12m: String::new(),
            address_city: item.address_city,
            updated_time: now.clone(),
            contact_first_name: String::new(),
            name: item.name,
            address_state: item.address_state,
            email: item.email,
            last_balance_update: now.clone(),
            created_time: now,
            balance: 100000.0,
            pref_pmt_method: "1".to_string(),
            address_zip: "11111".to_string(),
        }
    }

    /// Expand bill input into a full bill record with one output line item
    /// per input line item.
    ///
    /// Returns `None` when the bill carries no line items; the bill-level
    /// amounts come from the first one.
    pub fn bill_record(item: Bill) -> Option<BillRecord> {
        let now = record_timestamp();
        let amount = item.bill_line_items.first()?.amount;

        let bill_line_items = item
            .bill_line_items
            .into_iter()
            .map(|line| BillLineItemRecord {
                item_id: ZERO_ID.to_string(),
                updated_time: now.clone(),
                description: String::new(),
                chart_of_account_id: line.chart_of_account_id,
                // the enclosing bill's id, not the input line's billId
                bill_id: item.id.clone(),
                entity: "BillLineItem".to_string(),
                customer_id: ZERO_ID.to_string(),
                employee_id: ZERO_ID.to_string(),
                amount: line.amount,
                location_id: ZERO_ID.to_string(),
                department_id: ZERO_ID.to_string(),
                line_type: "1".to_string(),
                job_billable: false,
                created_time: now.clone(),
                actg_class_id: line.actg_class_id,
                job_id: ZERO_ID.to_string(),
                unit_price: String::new(),
                id: line.id,
                quantity: line.quantity,
            })
            .collect();

        Some(BillRecord {
            vendor_id: item.vendor_id,
            invoice_date: item.invoice_date,
            due_amount: amount,
            entity: "Bill".to_string(),
            payment_term_id: ZERO_ID.to_string(),
            has_auto_pay: false,
            paid_amount: String::new(),
            due_date: item.due_date,
            local_amount: String::new(),
            gl_posting_date: String::new(),
            approval_status: "0".to_string(),
            id: item.id,
            po_number: String::new(),
            bill_line_items,
            pay_from_bank_account_id: ZERO_ID.to_string(),
            description: item.description,
            exchange_rate: String::new(),
            invoice_number: item.invoice_number,
            is_active: "1".to_string(),
            updated_time: now.clone(),
            e_bill_created: false,
            scheduled_amount: 0.0,
            payment_status: "1".to_string(),
            amount,
            created_time: now,
            pay_from_chart_of_account_id: ZERO_ID.to_string(),
        })
    }

    /// Build an accounting-class record echoing the searched `name`.
    ///
    /// The caller supplies both ids; timestamps are a fixed constant.
    pub fn actg_class_record(id: String, parent_id: String, name: String) -> ActgClassRecord {
        ActgClassRecord {
            updated_time: ACTG_CLASS_TIME.to_string(),
            parent_actg_class_id: parent_id,
            name,
            merged_into_id: ZERO_ID.to_string(),
            entity: "ActgClass".to_string(),
            created_time: ACTG_CLASS_TIME.to_string(),
            short_name: String::new(),
            id,
            is_active: "1".to_string(),
            description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BillLineItem;

    fn sample_vendor() -> Vendor {
        Vendor {
            id: "vendor-id-0000000000".to_string(),
            name: "Acme Corp".to_string(),
            email: "ap@acme.example".to_string(),
            phone: "555-0100".to_string(),
            address_country: "USA".to_string(),
            address_city: "Boston".to_string(),
            address_state: "MA".to_string(),
            address1: "1 Main St".to_string(),
        }
    }

    fn sample_bill() -> Bill {
        Bill {
            id: "bill-id".to_string(),
            vendor_id: "vendor-id".to_string(),
            description: "Office supplies".to_string(),
            invoice_date: "2020-05-01".to_string(),
            invoice_number: "INV-42".to_string(),
            due_date: "2020-06-01".to_string(),
            bill_line_items: vec![BillLineItem {
                id: "line-id".to_string(),
                chart_of_account_id: "coa-id".to_string(),
                bill_id: "something-else".to_string(),
                amount: 250.0,
                actg_class_id: "cls-id".to_string(),
                quantity: 3,
            }],
        }
    }

    #[test]
    fn test_vendor_record_passes_identity_fields_through() {
        let record = Fixtures::vendor_record(sample_vendor());
        assert_eq!(record.id, "vendor-id-0000000000");
        assert_eq!(record.name, "Acme Corp");
        assert_eq!(record.email, "ap@acme.example");
        assert_eq!(record.phone, "555-0100");
        assert_eq!(record.payment_phone, "555-0100");
        assert_eq!(record.address_country, "USA");
        assert_eq!(record.address_city, "Boston");
        assert_eq!(record.address_state, "MA");
        assert_eq!(record.address1, "1 Main St");
    }

    #[test]
    fn test_vendor_record_placeholders() {
        let record = Fixtures::vendor_record(sample_vendor());
        assert_eq!(record.entity, "Vendor");
        assert_eq!(record.merged_into_id, ZERO_ID);
        assert_eq!(record.payment_term_id, ZERO_ID);
        assert!(record.send_notifications);
        assert!(record.track1099);
        assert!(!record.has_bank_account_auto_pay);
        assert_eq!(record.is_active, "1");
        assert_eq!(record.bill_sync_pref, "0");
        assert_eq!(record.balance, 100000.0);
        assert_eq!(record.pref_pmt_method, "1");
        assert_eq!(record.address_zip, "11111");
        assert_eq!(record.description, "");
        assert_eq!(record.company_name, "");
    }

    #[test]
    fn test_vendor_record_timestamps_agree() {
        let record = Fixtures::vendor_record(sample_vendor());
        assert_eq!(record.created_time, record.updated_time);
        assert_eq!(record.created_time, record.last_balance_update);
        assert_timestamp_format(&record.created_time);
    }

    #[test]
    fn test_bill_record_shapes_line_items() {
        let record = Fixtures::bill_record(sample_bill()).unwrap();
        assert_eq!(record.id, "bill-id");
        assert_eq!(record.entity, "Bill");
        assert_eq!(record.amount, 250.0);
        assert_eq!(record.due_amount, 250.0);
        assert_eq!(record.scheduled_amount, 0.0);

        assert_eq!(record.bill_line_items.len(), 1);
        let line = &record.bill_line_items[0];
        assert_eq!(line.entity, "BillLineItem");
        assert_eq!(line.id, "line-id");
        // billId always points at the enclosing bill
        assert_eq!(line.bill_id, "bill-id");
        assert_eq!(line.chart_of_account_id, "coa-id");
        assert_eq!(line.actg_class_id, "cls-id");
        assert_eq!(line.amount, 250.0);
        assert_eq!(line.quantity, 3);
        assert_eq!(line.item_id, ZERO_ID);
        assert_eq!(line.line_type, "1");
    }

    #[test]
    fn test_bill_record_keeps_every_line_item() {
        let mut bill = sample_bill();
        let mut second = bill.bill_line_items[0].clone();
        second.id = "line-2".to_string();
        second.amount = 10.0;
        bill.bill_line_items.push(second);

        let record = Fixtures::bill_record(bill).unwrap();
        assert_eq!(record.bill_line_items.len(), 2);
        assert_eq!(record.bill_line_items[1].id, "line-2");
        assert_eq!(record.bill_line_items[1].amount, 10.0);
        // bill-level amounts come from the first line item
        assert_eq!(record.amount, 250.0);
    }

    #[test]
    fn test_bill_record_requires_a_line_item() {
        let mut bill = sample_bill();
        bill.bill_line_items.clear();
        assert!(Fixtures::bill_record(bill).is_none());
    }

    #[test]
    fn test_actg_class_record_echoes_name_with_fixed_timestamps() {
        let record = Fixtures::actg_class_record(
            "clsAAAAAAAAAAAAAAAAA".to_string(),
            "clsBBBBBBBBBBBBBBBBB".to_string(),
            "Travel".to_string(),
        );
        assert_eq!(record.name, "Travel");
        assert_eq!(record.id, "clsAAAAAAAAAAAAAAAAA");
        assert_eq!(record.parent_actg_class_id, "clsBBBBBBBBBBBBBBBBB");
        assert_eq!(record.entity, "ActgClass");
        assert_eq!(record.created_time, ACTG_CLASS_TIME);
        assert_eq!(record.updated_time, ACTG_CLASS_TIME);
        assert_eq!(record.is_active, "1");
    }

    /// `YYYY-MM-DDTHH:MM:SS.mmm+0000`, 28 characters for UTC.
    fn assert_timestamp_format(ts: &str) {
        assert_eq!(ts.len(), 28, "unexpected timestamp length: {ts}");
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], "T");
        assert_eq!(&ts[19..20], ".");
        assert!(ts.ends_with("+0000"), "expected UTC offset: {ts}");
    }
}
