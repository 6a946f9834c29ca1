//! Response envelope shared by every JSON endpoint.

use serde::{Deserialize, Serialize};

/// The three-field wrapper the bill.com API puts around every response body.
///
/// All success paths use the literal status `0` and message `"Success"`;
/// the mock never produces any other envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub response_status: i32,
    pub response_message: String,
    pub response_data: T,
}

impl<T> Envelope<T> {
    /// Wrap `data` in a success envelope.
    pub fn success(data: T) -> Self {
        Self {
            response_status: 0,
            response_message: "Success".to_string(),
            response_data: data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_fields() {
        let envelope = Envelope::success(vec![1, 2, 3]);
        assert_eq!(envelope.response_status, 0);
        assert_eq!(envelope.response_message, "Success");
        assert_eq!(envelope.response_data, vec![1, 2, 3]);
    }

    #[test]
    fn test_envelope_wire_format() {
        let value = serde_json::to_value(Envelope::success(serde_json::json!({}))).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "response_status": 0,
                "response_message": "Success",
                "response_data": {}
            })
        );
    }
}
