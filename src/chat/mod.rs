//! Chat panel state: the Transcript / Draft / Busy triple and its store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `state` holds the pure reducer, `store` publishes snapshots and drives
//! the single in-flight turn against an `AssistantClient`.

pub mod state;
pub mod store;

pub use state::{ChatAction, ChatSnapshot, Phase, Transition};
pub use store::ChatStore;
