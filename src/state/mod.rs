//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`sign`, `toast`) so components depend on small
//! focused models provided through Leptos context.

pub mod sign;
pub mod toast;
