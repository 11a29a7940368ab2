//! Order endpoint client module

pub mod client;
pub mod traits;

use serde::{Deserialize, Serialize};

pub use client::{ApiError, HttpOrderApi};
pub use traits::OrderApi;

/// Discriminant value the endpoint returns for an accepted order
pub const SUCCESS_TOKEN: &str = "Success";

/// Response body of the order endpoint: a single discriminant field.
/// Anything other than the success token signals failure, regardless of the
/// HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub data: String,
}

impl SubmitResponse {
    pub fn is_success(&self) -> bool {
        self.data == SUCCESS_TOKEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_success_body_parses() {
        let response: SubmitResponse = serde_json::from_str(r#"{"data":"Success"}"#).unwrap();
        assert!(response.is_success());
    }

    #[test]
    fn test_rejection_body_parses_as_failure() {
        let response: SubmitResponse = serde_json::from_str(r#"{"data":"Invalid data"}"#).unwrap();
        assert!(!response.is_success());
    }

    #[test]
    fn test_discriminant_is_case_sensitive() {
        let response = SubmitResponse {
            data: "success".to_string(),
        };
        assert!(!response.is_success());
    }

    #[test]
    fn test_body_without_discriminant_is_an_error() {
        let result: Result<SubmitResponse, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_roundtrip() {
        let response = SubmitResponse {
            data: SUCCESS_TOKEN.to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"data":"Success"}"#);
    }
}
