//! Native assistant client over `reqwest`.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderValue};

use super::{AssistantClient, AssistantConfig, AssistantError, ChatReply, ChatRequest, interpret_response};

pub struct HttpAssistant {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpAssistant {
    /// Build a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantError::Build`] if the HTTP client fails to build.
    pub fn new(config: AssistantConfig) -> Result<Self, AssistantError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| AssistantError::Build(e.to_string()))?;
        Ok(Self { http, endpoint: config.endpoint })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait(?Send)]
impl AssistantClient for HttpAssistant {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, AssistantError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .json(request)
            .send()
            .await
            .map_err(|e| AssistantError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AssistantError::Transport(e.to_string()))?;

        tracing::debug!(%status, bytes = body.len(), "assistant responded");
        interpret_response(status, &body)
    }
}
