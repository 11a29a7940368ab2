//! Trait abstraction for the order endpoint to enable mocking in tests

use crate::state::OrderForm;
use async_trait::async_trait;

use super::client::ApiError;
use super::SubmitResponse;

/// Trait for order endpoint operations, enabling mocking in tests.
///
/// The endpoint is an opaque oracle: it gets the serialized order and
/// answers with a discriminant the caller inspects via
/// [`SubmitResponse::is_success`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// POST the order and decode the response body
    async fn submit_order(&self, order: &OrderForm) -> Result<SubmitResponse, ApiError>;
}
