//! Observable chat store driving one turn at a time.
//!
//! DESIGN
//! ======
//! The store wraps a `watch` channel holding the current [`ChatSnapshot`].
//! Every accepted action publishes a new snapshot; views subscribe and
//! re-render from it. Mutation only goes through [`ChatStore::dispatch`], so
//! the reducer stays the single source of transitions.
//!
//! A submitted turn is tracked by a `PendingTurn` guard. Settling consumes
//! the guard; dropping it unsettled (the submit future was abandoned)
//! settles the turn with [`AssistantError::Abandoned`] so Busy never stays
//! stuck and every user message still gets exactly one reply.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use tokio::sync::watch;

use super::state::{ChatAction, ChatSnapshot, Transition};
use crate::assistant::{AssistantClient, AssistantError, ChatReply};

/// Shared handle to the chat panel state. Cloning shares the same state.
#[derive(Clone, Debug)]
pub struct ChatStore {
    tx: Arc<watch::Sender<ChatSnapshot>>,
}

impl Default for ChatStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatStore {
    /// Empty transcript, empty draft, idle.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ChatSnapshot::default());
        Self { tx: Arc::new(tx) }
    }

    /// Current state. The returned snapshot never changes.
    #[must_use]
    pub fn snapshot(&self) -> ChatSnapshot {
        self.tx.borrow().clone()
    }

    /// Receive every published snapshot from now on.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ChatSnapshot> {
        self.tx.subscribe()
    }

    /// Apply one action and publish the result if anything changed.
    pub fn dispatch(&self, action: ChatAction) -> Transition {
        let mut transition = Transition::Unchanged;
        self.tx.send_if_modified(|state| {
            transition = state.apply(action);
            transition.changed()
        });
        transition
    }

    pub fn edit_draft(&self, text: impl Into<String>) {
        self.dispatch(ChatAction::EditDraft(text.into()));
    }

    /// Run one chat turn for `text` against `client`.
    ///
    /// Blank text or a submit while another turn is pending does nothing.
    /// Otherwise the user message is appended immediately, the request is
    /// sent, and exactly one assistant message is appended when it settles.
    /// Failures are recorded in the transcript, never returned.
    pub async fn submit<C>(&self, client: &C, text: impl Into<String>)
    where
        C: AssistantClient + ?Sized,
    {
        let Transition::Dispatch(request) = self.dispatch(ChatAction::Submit(text.into())) else {
            return;
        };
        let turn = PendingTurn { store: Some(self.clone()) };

        tracing::debug!(chars = request.message.chars().count(), "chat turn dispatched");
        let result = client.send(&request).await;
        turn.settle(result);
    }

    /// [`ChatStore::submit`] with the current draft.
    pub async fn submit_draft<C>(&self, client: &C)
    where
        C: AssistantClient + ?Sized,
    {
        let text = self.tx.borrow().draft().to_owned();
        self.submit(client, text).await;
    }

    fn settle(&self, result: Result<ChatReply, AssistantError>) {
        match &result {
            Ok(reply) => {
                let sources = reply.sources.as_ref().map_or(0, Vec::len);
                tracing::debug!(sources, "chat turn settled");
            }
            Err(e) => tracing::warn!(error = %e, "chat turn failed"),
        }
        self.dispatch(ChatAction::Settle(result));
    }
}

struct PendingTurn {
    store: Option<ChatStore>,
}

impl PendingTurn {
    fn settle(mut self, result: Result<ChatReply, AssistantError>) {
        if let Some(store) = self.store.take() {
            store.settle(result);
        }
    }
}

impl Drop for PendingTurn {
    fn drop(&mut self) {
        if let Some(store) = self.store.take() {
            store.settle(Err(AssistantError::Abandoned));
        }
    }
}
