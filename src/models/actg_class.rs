//! Accounting-class model.

use serde::{Deserialize, Serialize};

/// A fabricated accounting-class record.
///
/// Unlike vendors and bills there is no input shape here: the record is
/// built entirely from a filter value, never from an id lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActgClassRecord {
    pub updated_time: String,
    pub parent_actg_class_id: String,
    pub name: String,
    pub merged_into_id: String,
    pub entity: String,
    pub created_time: String,
    pub short_name: String,
    pub id: String,
    pub is_active: String,
    pub description: String,
}
