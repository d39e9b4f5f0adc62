//! Wire-protocol DTOs for the portal's JSON endpoints.
//!
//! DESIGN
//! ======
//! Every field the client can live without is optional or defaulted so a
//! sparse server response still decodes. Missing booleans read as `false`,
//! the same way an absent property is falsy in the page script the server
//! was written against.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response of `GET /api/check`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStatus {
    #[serde(default)]
    pub authenticated: bool,
    /// Present only when `authenticated` is true.
    #[serde(default)]
    pub username: Option<String>,
    /// Subscription tier (`"basic"`, `"premium"`), when the server sends it.
    #[serde(default)]
    pub subscription_level: Option<String>,
}

/// A resource visible to the current user. Opaque to the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: u64,
    pub name: String,
    pub access_level: String,
    /// Availability window as sent by the server, e.g. `"09:00-18:00"`.
    pub available_hours: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Response of `GET /api/resources`. An absent list means "no resources".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub resources: Option<Vec<Resource>>,
}

/// Response of the login, register and logout endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Response of `GET /api/resources/{id}`.
///
/// On success the resource fields are flattened into the body; on denial
/// (403) or a missing resource (404) only `success` and `message` are set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDetail {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub access_level: Option<String>,
    #[serde(default)]
    pub available_hours: Option<String>,
}
