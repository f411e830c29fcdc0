//! Assistant chat panel: transcript, typing indicator and question input.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel owns a fresh `ChatStore` for its lifetime and renders the
//! snapshots it publishes. Questions go to the `BrowserAssistant` provided
//! by the app; the store guarantees one reply per question and clears the
//! busy flag however the request ends.
//!
//! RENDERING
//! =========
//! The transcript is keyed by message id, so appending a turn adds one row
//! and draft edits touch neither the rows nor the scroll position.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;
use pokechat::{ChatSnapshot, ChatStore, Message, Role, Transcript};

use crate::net::api::BrowserAssistant;
use crate::state::chat::{mirror_store, spawn_submit};

pub const EMPTY_TRANSCRIPT_TEXT: &str = "Ask me anything about Pokemon!";
pub const INPUT_PLACEHOLDER: &str = "Ask about Pokemon...";

/// Chat panel showing the conversation and a single-line question input.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let assistant = use_context::<BrowserAssistant>().unwrap_or_default();
    let store = ChatStore::new();
    let chat = mirror_store(&store);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let transcript = Memo::new(move |_| chat.with(|c| c.transcript().clone()));
    let scroll = Memo::new(move |_| chat.with(scroll_key));

    Effect::new(move || {
        scroll.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let input_store = store.clone();
    let on_input = move |ev: leptos::ev::Event| input_store.edit_draft(event_target_value(&ev));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let ready = chat.with_untracked(|c| c.can_submit(c.draft()));
        if ready {
            spawn_submit(store.clone(), assistant.clone());
        }
    };

    let busy = move || chat.get().busy();

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    transcript
                        .with(Transcript::is_empty)
                        .then(|| view! { <div class="chat-panel__empty">{EMPTY_TRANSCRIPT_TEXT}</div> })
                }}

                <For
                    each=move || transcript.with(|t| t.as_slice().to_vec())
                    key=message_key
                    children=|msg: Message| message_view(&msg)
                />

                {move || {
                    busy()
                        .then(|| {
                            view! {
                                <div class="chat-panel__message chat-panel__message--assistant chat-panel__typing">
                                    <span class="chat-panel__dot"></span>
                                    <span class="chat-panel__dot"></span>
                                    <span class="chat-panel__dot"></span>
                                </div>
                            }
                        })
                }}
            </div>

            <form class="chat-panel__input-row" on:submit=on_submit>
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder=INPUT_PLACEHOLDER
                    disabled=busy
                    prop:value=move || chat.get().draft().to_owned()
                    on:input=on_input
                />
                <button class="btn btn--primary chat-panel__send" type="submit" disabled=busy>
                    "Send"
                </button>
            </form>
        </div>
    }
}

fn message_view(msg: &Message) -> impl IntoView + use<> {
    let class = message_class(msg.role);
    let content = msg.content.clone();
    let sources = msg.sources_line();

    view! {
        <div class=class>
            <p class="chat-panel__content">{content}</p>
            {sources.map(|line| view! { <div class="chat-panel__sources">{line}</div> })}
        </div>
    }
}

fn message_key(msg: &Message) -> String {
    msg.id.clone()
}

fn message_class(role: Role) -> String {
    format!("chat-panel__message chat-panel__message--{}", role.as_str())
}

/// What the auto-scroll effect follows: new rows and the typing indicator.
fn scroll_key(state: &ChatSnapshot) -> (usize, bool) {
    (state.transcript().len(), state.busy())
}
