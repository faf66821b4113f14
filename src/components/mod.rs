//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form fields and notifications while reading/writing
//! shared state from Leptos context providers.

pub mod input;
pub mod toast;
