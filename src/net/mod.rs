//! Networking modules for the portal's HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the injectable client trait and its browser implementation,
//! and `types` defines the JSON wire schema for every endpoint.

pub mod api;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;
