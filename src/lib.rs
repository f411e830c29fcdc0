//! # pokechat
//!
//! UI-agnostic core of the Pokémon assistant chat panel.
//!
//! The crate owns the message model, the observable chat store and the
//! contract with the external assistant endpoint. The Leptos front end in
//! `client/` renders store snapshots; native callers and tests drive the
//! store directly with [`assistant::HttpAssistant`].

pub mod assistant;
pub mod chat;
pub mod message;

pub use assistant::{AssistantClient, AssistantConfig, AssistantError, ChatReply, ChatRequest};
pub use chat::{ChatAction, ChatSnapshot, ChatStore, Phase};
pub use message::{Message, Role, Transcript};
