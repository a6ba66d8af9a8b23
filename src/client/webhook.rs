//! HTTP client for the lead webhook endpoint.

use reqwest::header::{HeaderMap, HeaderValue};

use crate::model::LeadRecord;

use super::error::SubmitError;

/// Where and how to reach the webhook endpoint.
///
/// Passed in at construction; nothing here is ambient or mutable afterwards.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Full URL of the lead intake endpoint.
    pub endpoint: String,
    /// Value for the `x-api-key` header.
    pub api_key: String,
}

impl WebhookConfig {
    /// Creates a new configuration.
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

/// One-shot lead submission client.
///
/// Wraps a `reqwest::Client` carrying the `x-api-key` header. Deliberately no
/// request timeout: the submit call waits for the endpoint's response or a
/// connection failure, and the caller guards against concurrent submissions.
/// No retries.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    endpoint: String,
}

impl WebhookClient {
    /// Builds a client from configuration.
    ///
    /// Fails with [`SubmitError::Config`] when the API key cannot be used as
    /// a header value.
    pub fn new(config: WebhookConfig) -> Result<Self, SubmitError> {
        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.api_key)
            .map_err(|_| SubmitError::Config("API key is not a valid header value".to_string()))?;
        headers.insert("x-api-key", key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| SubmitError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    /// POSTs one lead as JSON.
    ///
    /// A 2xx response is success and its body is ignored. A non-2xx response
    /// becomes [`SubmitError::Rejected`] carrying the body's `message` string
    /// when the body parses as JSON and has one, else `Server error: <status>`.
    pub async fn submit(&self, lead: &LeadRecord) -> Result<(), SubmitError> {
        let response = self.client.post(&self.endpoint).json(lead).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Tolerate an unparsable or missing error body.
        let body: serde_json::Value = response.json().await.unwrap_or_default();
        let message = body
            .get("message")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Server error: {}", status.as_u16()));

        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
