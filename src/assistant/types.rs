//! Assistant wire types and errors.
//!
//! Transport-neutral types shared by the native `reqwest` client and the
//! browser `gloo-net` client.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Message shown when the collaborator gives no usable explanation.
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to get response from server";

/// Message shown when a turn is dropped before the call settles.
pub const ABANDONED_ERROR_MESSAGE: &str = "Request was abandoned before a response arrived";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while asking the assistant a question.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssistantError {
    /// The request never produced an HTTP response.
    #[error("assistant request failed: {0}")]
    Transport(String),

    /// The collaborator returned a non-success HTTP status.
    #[error("assistant response error: status {status}")]
    Status { status: u16, detail: Option<String> },

    /// A success response body could not be decoded.
    #[error("assistant response parse failed: {0}")]
    Decode(String),

    /// The pending turn was dropped before the call settled.
    #[error("assistant request abandoned")]
    Abandoned,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    Build(String),
}

impl AssistantError {
    /// Text placed after `Error: ` in the transcript.
    ///
    /// Only a server-provided `detail` is surfaced verbatim; transport and
    /// decode failures use [`FALLBACK_ERROR_MESSAGE`] and are logged instead.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            Self::Abandoned => ABANDONED_ERROR_MESSAGE.to_owned(),
            Self::Status { detail: None, .. } | Self::Transport(_) | Self::Decode(_) | Self::Build(_) => {
                FALLBACK_ERROR_MESSAGE.to_owned()
            }
        }
    }
}

// =============================================================================
// REQUEST / RESPONSE
// =============================================================================

/// Body of `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Successful `POST /chat` body.
///
/// Fields degrade instead of failing: a missing `response` becomes empty
/// content, a missing, `null` or non-array `sources` renders nothing, and
/// non-string entries inside `sources` are skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub response: String,
    #[serde(default, deserialize_with = "string_entries")]
    pub sources: Option<Vec<String>>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_entries<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Vec<String>>, D::Error> {
    let sources = match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(source) => Some(source),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    };
    Ok(sources)
}

/// Error body some collaborators return alongside a non-success status.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// String `detail`, ignoring empty strings and structured payloads.
    pub(crate) fn into_detail(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(detail)) if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }
}
