//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page exposes an async orchestration function generic over
//! `PortalApi` (request in, view model or command out) and a component that
//! wires it to the DOM. The functions carry the behavior; the components only
//! spawn them and store the result.

pub mod home;
pub mod login;
pub mod register;
pub mod resource_detail;
pub mod resources;
