//! Assistant collaborator — the single external `POST /chat` endpoint.
//!
//! DESIGN
//! ======
//! `AssistantClient` is the seam between the chat store and the network.
//! The native implementation (`http`) uses `reqwest`; the browser front end
//! implements the same trait over `gloo-net`. Both hand the raw status and
//! body to [`interpret_response`] so success/error classification is shared.
//!
//! The trait is `?Send`: browser futures are not `Send` and the store only
//! ever drives one request at a time on a single task.

pub mod config;
#[cfg(feature = "http")]
pub mod http;
pub mod types;


pub use config::AssistantConfig;
#[cfg(feature = "http")]
pub use http::HttpAssistant;
pub use types::{ABANDONED_ERROR_MESSAGE, AssistantError, ChatReply, ChatRequest, FALLBACK_ERROR_MESSAGE};

use types::ErrorBody;

/// Something that can answer one chat turn.
#[async_trait::async_trait(?Send)]
pub trait AssistantClient {
    /// Send one question and wait for the collaborator to settle.
    ///
    /// # Errors
    ///
    /// Returns an [`AssistantError`] for transport failures, non-success
    /// statuses and undecodable success bodies.
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, AssistantError>;
}

/// Classify a raw collaborator response.
///
/// Any 2xx status is success and the body must be a JSON object; other
/// statuses become [`AssistantError::Status`] carrying the body's `detail`
/// string when one can be read.
///
/// # Errors
///
/// Returns [`AssistantError::Status`] for non-2xx statuses and
/// [`AssistantError::Decode`] when a success body is not a valid reply.
pub fn interpret_response(status: u16, body: &str) -> Result<ChatReply, AssistantError> {
    if !(200..300).contains(&status) {
        let detail = match serde_json::from_str::<ErrorBody>(body) {
            Ok(error_body) => error_body.into_detail(),
            Err(_) => None,
        };
        return Err(AssistantError::Status { status, detail });
    }
    serde_json::from_str::<ChatReply>(body).map_err(|e| AssistantError::Decode(e.to_string()))
}
