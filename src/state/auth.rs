#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::ApiError;
use crate::net::types::SessionStatus;

/// Identity shown in the page header.
///
/// The default value is the logged-out look: empty username, logout hidden.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub username: Option<String>,
    pub subscription_level: Option<String>,
}

impl AuthState {
    pub fn from_status(status: SessionStatus) -> Self {
        if !status.authenticated {
            return Self::default();
        }
        Self {
            authenticated: true,
            username: status.username,
            subscription_level: status.subscription_level,
        }
    }

    /// A failed check keeps the logged-out look; the error is only logged.
    pub fn from_check(result: Result<SessionStatus, ApiError>) -> Self {
        match result {
            Ok(status) => Self::from_status(status),
            Err(err) => {
                log::warn!("session check failed: {err}");
                Self::default()
            }
        }
    }

    pub fn username_text(&self) -> String {
        self.username.clone().unwrap_or_default()
    }

    /// CSS `display` value for the logout button.
    pub fn logout_display(&self) -> &'static str {
        if self.authenticated { "block" } else { "none" }
    }
}
