//! Browser transport for the assistant endpoint.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): the call fails with a transport error
//! since the endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an `AssistantError`; the chat store turns it
//! into a visible assistant message, so nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use pokechat::{AssistantClient, AssistantConfig, AssistantError, ChatReply, ChatRequest};

#[cfg(any(test, feature = "csr"))]
const ACCEPT_JSON: (&str, &str) = ("Accept", "application/json");

#[cfg(any(test, feature = "csr"))]
fn request_failed(e: &impl std::fmt::Display) -> AssistantError {
    AssistantError::Transport(e.to_string())
}

/// `AssistantClient` backed by the browser's `fetch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserAssistant {
    endpoint: String,
}

impl BrowserAssistant {
    #[must_use]
    pub fn new(config: &AssistantConfig) -> Self {
        Self { endpoint: config.endpoint.clone() }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for BrowserAssistant {
    fn default() -> Self {
        Self::new(&AssistantConfig::default())
    }
}

#[async_trait::async_trait(?Send)]
impl AssistantClient for BrowserAssistant {
    /// `POST {endpoint}` with `{ "message": ... }`, expecting JSON back.
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, AssistantError> {
        #[cfg(feature = "csr")]
        {
            let (accept_name, accept_value) = ACCEPT_JSON;
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .header(accept_name, accept_value)
                .json(request)
                .map_err(|e| request_failed(&e))?
                .send()
                .await
                .map_err(|e| {
                    log::warn!("chat request to {} failed: {e}", self.endpoint);
                    request_failed(&e)
                })?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| request_failed(&e))?;
            pokechat::assistant::interpret_response(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(AssistantError::Transport("not available outside the browser".to_owned()))
        }
    }
}
