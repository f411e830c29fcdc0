//! Client-side state glue.
//!
//! DESIGN
//! ======
//! Chat state itself lives in `pokechat::ChatStore`; this layer only
//! mirrors store snapshots into Leptos signals.

pub mod chat;
