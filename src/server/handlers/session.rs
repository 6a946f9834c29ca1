//! Login and logout handlers.

use axum::Json;

use crate::envelope::Envelope;
use crate::ident::random_id;
use crate::models::Session;

/// Endpoint the fabricated session points clients at.
pub const API_ENDPOINT: &str = "https://api-mock.bill.com/api/v2";

/// POST /api/v2/Login.json
///
/// Always succeeds, ignoring whatever credentials the body carries, and
/// hands out fresh random session/org/user ids.
pub async fn login() -> Json<Envelope<Session>> {
    Json(Envelope::success(Session {
        api_end_point: API_ENDPOINT.to_string(),
        users_id: random_id(20),
        session_id: random_id(45),
        org_id: random_id(20),
    }))
}

/// POST /api/v2/Logout.json
///
/// Always succeeds with an empty payload.
pub async fn logout() -> Json<Envelope<serde_json::Value>> {
    Json(Envelope::success(serde_json::json!({})))
}
