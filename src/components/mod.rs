//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shared page chrome (identity header, feedback line,
//! resource cards) and read shared state from Leptos context providers.

pub mod header;
pub mod resource_card;
pub mod status_line;
