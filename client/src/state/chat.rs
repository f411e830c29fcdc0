//! Bridges the framework-neutral `ChatStore` into Leptos reactivity.

use leptos::prelude::*;
use pokechat::{ChatSnapshot, ChatStore};

use crate::net::api::BrowserAssistant;

/// Signal that follows every snapshot the store publishes.
///
/// The mirror task stops once the signal is disposed with its owner.
pub fn mirror_store(store: &ChatStore) -> RwSignal<ChatSnapshot> {
    let rx = store.subscribe();
    let chat = RwSignal::new(rx.borrow().clone());

    #[cfg(feature = "csr")]
    {
        let mut rx = rx;
        leptos::task::spawn_local(async move {
            while rx.changed().await.is_ok() {
                let next = rx.borrow_and_update().clone();
                if chat.try_set(next).is_some() {
                    break;
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = rx;
    }

    chat
}

/// Run the current draft as one chat turn in the background.
pub fn spawn_submit(store: ChatStore, assistant: BrowserAssistant) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        store.submit_draft(&assistant).await;
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (store, assistant);
    }
}
