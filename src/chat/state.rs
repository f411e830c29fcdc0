//! Chat state snapshot and the reducer that advances it.
//!
//! DESIGN
//! ======
//! `ChatSnapshot` is the Transcript / Draft / Busy triple. It only changes
//! through [`ChatSnapshot::apply`], which is pure apart from id generation
//! and reports both whether anything changed and which outbound call (if any)
//! the caller must now make.
//!
//! STATE MACHINE
//! =============
//! `Idle` --Submit(valid)--> `AwaitingResponse` --Settle--> `Idle`.
//! Submits while awaiting and settles while idle are ignored.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::assistant::{AssistantError, ChatReply, ChatRequest};
use crate::message::{Message, Transcript};

/// Lifecycle phase derived from the Busy flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    AwaitingResponse,
}

/// Input to the reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatAction {
    /// Replace the draft with the text currently in the input field.
    EditDraft(String),
    /// Submit the given text as a new turn.
    Submit(String),
    /// The outbound call for the pending turn settled.
    Settle(Result<ChatReply, AssistantError>),
}

/// What applying an action did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Action rejected or had no effect.
    Unchanged,
    /// State changed; nothing to send.
    Changed,
    /// A turn was accepted; the caller must send this request and settle it.
    Dispatch(ChatRequest),
}

impl Transition {
    #[must_use]
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Immutable view of the chat panel state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatSnapshot {
    transcript: Transcript,
    draft: String,
    busy: bool,
}

impl ChatSnapshot {
    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn busy(&self) -> bool {
        self.busy
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.busy { Phase::AwaitingResponse } else { Phase::Idle }
    }

    /// Whether `text` would be accepted by [`ChatAction::Submit`] right now.
    #[must_use]
    pub fn can_submit(&self, text: &str) -> bool {
        !self.busy && !text.trim().is_empty()
    }

    /// Advance the state by one action.
    pub fn apply(&mut self, action: ChatAction) -> Transition {
        match action {
            ChatAction::EditDraft(text) => {
                if self.draft == text {
                    return Transition::Unchanged;
                }
                self.draft = text;
                Transition::Changed
            }
            ChatAction::Submit(text) => {
                if !self.can_submit(&text) {
                    return Transition::Unchanged;
                }
                self.transcript.push(Message::user(text.clone()));
                self.draft.clear();
                self.busy = true;
                Transition::Dispatch(ChatRequest { message: text })
            }
            ChatAction::Settle(result) => {
                if !self.busy {
                    return Transition::Unchanged;
                }
                let message = match result {
                    Ok(reply) => Message::from_reply(reply),
                    Err(error) => Message::from_error(&error),
                };
                self.transcript.push(message);
                self.busy = false;
                Transition::Changed
            }
        }
    }
}
