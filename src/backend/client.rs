//! HTTP client for the order submission endpoint
//!
//! POSTs the order as JSON and decodes the `{ "data": ... }` body. The HTTP
//! status code is not interpreted: a 400 rejection still carries a body, and
//! the discriminant alone decides success or failure.

use crate::config::TuiConfig;
use crate::state::OrderForm;
use thiserror::Error;

use super::traits::OrderApi;
use super::SubmitResponse;

/// Default order endpoint address
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/form";

/// Environment variable overriding the endpoint address
const ENDPOINT_ENV: &str = "ORDER_API_URL";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to reach order endpoint: {0}")]
    Transport(reqwest::Error),
    #[error("malformed response from order endpoint: {0}")]
    Decode(reqwest::Error),
}

/// Client for the order submission endpoint
pub struct HttpOrderApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpOrderApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Resolve the endpoint address: environment variable, then config file,
    /// then the built-in default.
    pub fn from_config(config: &TuiConfig) -> Self {
        let endpoint = std::env::var(ENDPOINT_ENV)
            .ok()
            .or_else(|| config.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl OrderApi for HttpOrderApi {
    async fn submit_order(&self, order: &OrderForm) -> Result<SubmitResponse, ApiError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(order)
            .send()
            .await
            .map_err(ApiError::Transport)?;

        response.json().await.map_err(ApiError::Decode)
    }
}
