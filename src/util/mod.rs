//! Helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep browser concerns and form rules out of page and
//! component code so they can be tested natively.

pub mod storage;
pub mod submit;
pub mod validation;
