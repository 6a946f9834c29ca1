//! Extraction of the `data` form field.
//!
//! The bill.com API does not post JSON bodies directly: every operation
//! sends `application/x-www-form-urlencoded` with a single `data` field
//! whose value is a JSON document. This extractor peels off both layers
//! and decodes into the handler's typed shape.

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Form;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::MockError;

#[derive(Deserialize)]
struct DataField {
    data: String,
}

/// Typed JSON payload extracted from the `data` form field.
///
/// Rejections map to structured 400 responses via [`MockError`]; a
/// malformed body never crashes the process or hangs the client.
pub struct FormData<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for FormData<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = MockError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(field) = Form::<DataField>::from_request(req, state)
            .await
            .map_err(|err| MockError::MalformedForm(err.body_text()))?;

        let value =
            serde_json::from_str(&field.data).map_err(|err| MockError::MalformedData(err.to_string()))?;

        Ok(Self(value))
    }
}
