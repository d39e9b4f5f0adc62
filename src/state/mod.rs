//! Client-side view models.
//!
//! DESIGN
//! ======
//! Each model is built from one server response by a pure function, so
//! rendering rules can be tested without a browser. Components hold them in
//! `RwSignal`s and only ever replace them wholesale.

pub mod auth;
pub mod detail;
pub mod resources;
pub mod submission;
