//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The single page owns the static chrome and delegates everything
//! interactive to `components`.

pub mod home;
