//! Chat message model and the append-only transcript.
//!
//! DESIGN
//! ======
//! `Transcript` is copy-on-write behind an `Arc` so a published
//! `ChatSnapshot` never changes after subscribers have seen it. Appending to
//! a transcript that is still shared clones the backing vector first.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::assistant::{AssistantError, ChatReply};

// =============================================================================
// ROLE
// =============================================================================

/// Author of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Lowercase name of the role, used as the message class modifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

// =============================================================================
// MESSAGE
// =============================================================================

/// A single chat turn shown in the transcript.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Render key (UUID string). Carries no meaning beyond identity.
    pub id: String,
    pub role: Role,
    pub content: String,
    /// Citation identifiers attached to an assistant reply.
    #[serde(default)]
    pub sources: Option<Vec<String>>,
}

impl Message {
    fn new(role: Role, content: String, sources: Option<Vec<String>>) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), role, content, sources }
    }

    /// Message typed by the user, stored exactly as submitted.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content.into(), None)
    }

    /// Assistant reply carrying the collaborator's response and citations.
    #[must_use]
    pub fn assistant(content: impl Into<String>, sources: Option<Vec<String>>) -> Self {
        Self::new(Role::Assistant, content.into(), sources)
    }

    #[must_use]
    pub fn from_reply(reply: ChatReply) -> Self {
        Self::assistant(reply.response, reply.sources)
    }

    /// Assistant-role message describing a failed turn: `Error: <message>`.
    #[must_use]
    pub fn from_error(error: &AssistantError) -> Self {
        Self::assistant(format!("Error: {}", error.user_message()), None)
    }

    /// Citation line rendered under the message body, e.g. `Sources: a, b`.
    ///
    /// Present whenever the reply carried a `sources` list, even an empty one.
    #[must_use]
    pub fn sources_line(&self) -> Option<String> {
        self.sources
            .as_ref()
            .map(|sources| format!("Sources: {}", sources.join(", ")))
    }
}

// =============================================================================
// TRANSCRIPT
// =============================================================================

/// Ordered, append-only chat history. Insertion order is chronological order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Arc<Vec<Message>>,
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, message: Message) {
        Arc::make_mut(&mut self.messages).push(message);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
