//! Perplexity chat-completions client

use super::types::{ChatRequest, ChatResponse};
use super::{ChatBackend, ChatError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// Bound on one whole request, connect through body read
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Marker the API embeds in error bodies for unknown model names
const INVALID_MODEL_MARKER: &str = "invalid_model";

/// Client for the Perplexity chat-completions API
pub struct PerplexityClient {
    client: Client,
    api_key: String,
    endpoint: String,
    timeout: Duration,
}

impl PerplexityClient {
    pub fn new(api_key: impl Into<String>, base_url: &str) -> Self {
        Self::with_timeout(api_key, base_url, REQUEST_TIMEOUT)
    }

    fn with_timeout(api_key: impl Into<String>, base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key: api_key.into(),
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            timeout,
        }
    }

    fn classify_request_error(&self, e: &reqwest::Error) -> ChatError {
        if e.is_timeout() {
            ChatError::timeout(format!(
                "Error: request timed out after {} seconds.",
                self.timeout.as_secs()
            ))
        } else if e.is_connect() {
            ChatError::transport(format!("Exception: connection failed: {e}"))
        } else {
            ChatError::transport(format!("Exception: {e}"))
        }
    }
}

#[async_trait]
impl ChatBackend for PerplexityClient {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify_request_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.classify_request_error(&e))?;

        tracing::debug!(
            model = %request.model,
            status = status.as_u16(),
            "chat completion response"
        );

        if status != StatusCode::OK {
            if body.to_lowercase().contains(INVALID_MODEL_MARKER) {
                return Err(ChatError::invalid_model(format!(
                    "model {} not recognized by the API",
                    request.model
                )));
            }
            return Err(ChatError::api(format!("Error {}: {body}", status.as_u16())));
        }

        let completion: PerplexityResponse = serde_json::from_str(&body)
            .map_err(|e| ChatError::malformed(format!("Exception: unexpected response body: {e}")))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ChatError::malformed("Exception: response contained no choices"))?;

        Ok(ChatResponse {
            content: choice.message.content,
        })
    }
}

// Perplexity API types (chat-completions response shape)

#[derive(Debug, Deserialize)]
struct PerplexityResponse {
    choices: Vec<PerplexityChoice>,
}

#[derive(Debug, Deserialize)]
struct PerplexityChoice {
    message: PerplexityMessage,
}

#[derive(Debug, Deserialize)]
struct PerplexityMessage {
    content: String,
}
