// Frame submission to the hosted facial-expression-recognition model

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, error};

use crate::config::InferenceConfig;
use crate::error::{ExpressionMapperError, Result};
use crate::models::RawInferenceResult;

/// Client for the external facial-expression classification service.
///
/// Each submission is an independent, stateless round trip: one outbound
/// POST carrying the frame as an unencoded binary body. No retries, no
/// timeouts, no shared state between calls.
pub struct InferenceClient {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
}

impl InferenceClient {
    /// Creates a new InferenceClient from the inference configuration.
    ///
    /// The credential is injected here rather than read from ambient
    /// process state, so the client is testable against a stub endpoint.
    pub fn new(config: &InferenceConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.clone(),
            api_token: config.api_token.clone(),
        }
    }

    /// Submits a raw image frame and returns the decoded raw result.
    ///
    /// An empty payload is a client error and makes no outbound call.
    /// A non-success upstream status fails with the response body kept
    /// for diagnostics. A success body that cannot be decoded is not an
    /// error here: shape handling is deferred to the normalizer.
    pub async fn submit(&self, image: &Bytes) -> Result<RawInferenceResult> {
        if image.is_empty() {
            return Err(ExpressionMapperError::MissingImage);
        }

        let mut request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image.clone());
        if let Some(token) = &self.api_token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("inference service error (HTTP {}): {}", status, body);
            return Err(ExpressionMapperError::InferenceService { status, body });
        }

        let body = response.text().await?;
        debug!("inference service response: {}", body);

        Ok(RawInferenceResult::from_body(&body))
    }
}
