//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (form data, location, timers)
//! from page logic so the logic stays testable natively.

pub mod command;
pub mod form;
pub mod route;
