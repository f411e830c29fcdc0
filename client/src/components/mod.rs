//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render interaction surfaces; pages compose them inside static
//! chrome.

pub mod chat_panel;
