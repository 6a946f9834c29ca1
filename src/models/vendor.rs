//! Vendor models.

use serde::{Deserialize, Serialize};

/// Vendor fields a client may supply under the `obj` key.
///
/// Every field is optional on the wire; anything missing defaults to the
/// empty string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address_country: String,
    pub address_city: String,
    pub address_state: String,
    pub address1: String,
}

/// A fully-populated vendor record as returned by the API.
///
/// Field order and placeholder values mirror the real bill.com schema;
/// compatibility tests compare them field-for-field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecord {
    pub send_notifications: bool,
    pub merged_into_id: String,
    pub tax_id: String,
    pub entity: String,
    pub payment_email: String,
    pub payment_term_id: String,
    pub has_bank_account_auto_pay: bool,
    pub payment_currency: String,
    pub bank_country: String,
    pub id: String,
    pub acc_number: String,
    pub payment_phone: String,
    pub payment_purpose: String,
    pub since: String,
    pub pay_days_before: String,
    pub address_country: String,
    pub bill_sync_pref: String,
    pub is_active: String,
    pub track1099: bool,
    pub name_on_check: String,
    pub fax: String,
    pub description: String,
    pub bill_currency: String,
    pub company_name: String,
    pub pay_by: String,
    pub address1: String,
    pub address2: String,
    pub address3: String,
    pub address4: String,
    pub phone: String,
    pub contact_last_name: String,
    pub account_type: String,
    pub enabled_combine_payments: bool,
    pub short_name: String,
    #[serde(rename = "externalBillPayIn12m")]
    pub external_bill_pay_in_12m: String,
    pub address_city: String,
    pub updated_time: String,
    pub contact_first_name: String,
    pub name: String,
    pub address_state: String,
    pub email: String,
    pub last_balance_update: String,
    pub created_time: String,
    pub balance: f64,
    pub pref_pmt_method: String,
    pub address_zip: String,
}
