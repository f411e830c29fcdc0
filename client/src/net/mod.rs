//! Networking for the browser front end.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the core `AssistantClient` contract over `fetch`.

pub mod api;
