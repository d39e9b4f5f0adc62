//! # resource-portal
//!
//! Leptos + WASM client for the session-authenticated resource portal.
//!
//! The crate checks the login state on every page load, submits login and
//! registration forms, logs out, and renders the resources the server allows
//! the current user to see. All HTTP traffic goes through the
//! [`net::api::PortalApi`] trait so page orchestration can be tested natively
//! against a scripted client; the `csr` feature wires in the real browser
//! client, logger and mount point.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs the panic hook and logger, then mounts [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let parsed = config::ClientConfig::from_build_env();
    let log_level = parsed
        .as_ref()
        .map_or(config::DEFAULT_LOG_LEVEL, |config| config.log_level);
    if let Err(err) = console_log::init_with_level(log_level) {
        leptos::logging::console_warn(&format!("logger init failed: {err}"));
    }

    let config = parsed.unwrap_or_else(|err| {
        log::warn!("invalid build configuration, using defaults: {err}");
        config::ClientConfig::default()
    });
    log::info!("resource portal starting (api base {:?})", config.api_base);

    leptos::mount::mount_to_body(move || {
        use crate::app::App;
        let config = config.clone();
        leptos::view! { <App config/> }
    });
}
