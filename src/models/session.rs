//! Login session model.

use serde::{Deserialize, Serialize};

/// The fabricated session bundle returned by every login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub api_end_point: String,
    pub users_id: String,
    pub session_id: String,
    pub org_id: String,
}
