//! Accounting-class endpoint handlers.

use axum::Json;

use super::ListRequest;
use crate::envelope::Envelope;
use crate::error::{MockError, Result};
use crate::fixtures::Fixtures;
use crate::ident::random_id;
use crate::models::ActgClassRecord;
use crate::server::extract::FormData;

/// POST /api/v2/List/ActgClass.json
///
/// Echoes the first filter value back as the class name in a one-element
/// result list. An empty filter list is a 400, not a crash.
pub async fn list_actg_classes(
    FormData(req): FormData<ListRequest>,
) -> Result<Json<Envelope<Vec<ActgClassRecord>>>> {
    let filter = req
        .filters
        .into_iter()
        .next()
        .ok_or_else(|| MockError::InvalidShape("filters must contain at least one entry".to_string()))?;

    let record = Fixtures::actg_class_record(class_id(), class_id(), filter.value);
    Ok(Json(Envelope::success(vec![record])))
}

/// Accounting-class ids carry a `cls` prefix, 20 characters total.
fn class_id() -> String {
    format!("cls{}", random_id(17))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::ALPHABET;

    #[test]
    fn test_class_id_shape() {
        let id = class_id();
        assert_eq!(id.len(), 20);
        assert!(id.starts_with("cls"));
        assert!(id.bytes().skip(3).all(|b| ALPHABET.contains(&b)));
    }
}
