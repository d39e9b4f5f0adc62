//! REST client for the portal endpoints.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call returns
//! [`ApiError::Unavailable`] since the endpoints only exist behind a browser
//! session cookie.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures come back as typed [`ApiError`] values.
//! Pages log them and leave the DOM as it was; only server-supplied
//! messages are ever shown to the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::types::{OperationResult, ResourceDetail, ResourceList, SessionStatus};
use crate::util::form::FormFields;

pub const CHECK_PATH: &str = "/api/check";
pub const LOGIN_PATH: &str = "/api/login";
pub const LOGOUT_PATH: &str = "/api/logout";
pub const REGISTER_PATH: &str = "/api/register";
pub const RESOURCES_PATH: &str = "/api/resources";

fn resource_detail_path(id: u64) -> String {
    format!("{RESOURCES_PATH}/{id}")
}

/// Errors produced by portal API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network failure, CORS, ...).
    #[error("request failed: {0}")]
    Request(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),

    /// The response body was not the expected JSON shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// The server answered with a non-success status on an endpoint that
    /// has no JSON error body.
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// The HTTP client only exists in browser builds.
    #[error("HTTP client not available outside the browser")]
    Unavailable,
}

/// Injectable client for the portal endpoints.
///
/// `?Send` because the browser runtime is single-threaded and `gloo-net`
/// futures hold JS values.
#[async_trait(?Send)]
pub trait PortalApi {
    /// `GET /api/check`.
    async fn check_session(&self) -> Result<SessionStatus, ApiError>;

    /// `POST /api/login` with the form fields as a JSON object.
    async fn login(&self, fields: &FormFields) -> Result<OperationResult, ApiError>;

    /// `POST /api/register` with the form fields as a JSON object.
    async fn register(&self, fields: &FormFields) -> Result<OperationResult, ApiError>;

    /// `POST /api/logout`. The response body is ignored.
    async fn logout(&self) -> Result<(), ApiError>;

    /// `GET /api/resources`.
    async fn list_resources(&self) -> Result<ResourceList, ApiError>;

    /// `GET /api/resources/{id}`. Denials (403/404) still decode.
    async fn resource_detail(&self, id: u64) -> Result<ResourceDetail, ApiError>;
}

/// Browser HTTP client rooted at a configurable API base.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into().trim_end_matches('/').to_owned() }
    }

    /// Absolute (or same-origin) URL for an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

#[async_trait(?Send)]
impl PortalApi for HttpApi {
    async fn check_session(&self) -> Result<SessionStatus, ApiError> {
        self.get_json(CHECK_PATH, true).await
    }

    async fn login(&self, fields: &FormFields) -> Result<OperationResult, ApiError> {
        self.post_form(LOGIN_PATH, fields).await
    }

    async fn register(&self, fields: &FormFields) -> Result<OperationResult, ApiError> {
        self.post_form(REGISTER_PATH, fields).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty(LOGOUT_PATH).await
    }

    async fn list_resources(&self) -> Result<ResourceList, ApiError> {
        self.get_json(RESOURCES_PATH, true).await
    }

    async fn resource_detail(&self, id: u64) -> Result<ResourceDetail, ApiError> {
        self.get_json(&resource_detail_path(id), false).await
    }
}

#[cfg(feature = "csr")]
impl HttpApi {
    async fn get_json<T: DeserializeOwned>(&self, path: &str, require_ok: bool) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        log::debug!("GET {url}");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if require_ok && !resp.ok() {
            return Err(ApiError::Status { status: resp.status() });
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_form<T: DeserializeOwned>(&self, path: &str, fields: &FormFields) -> Result<T, ApiError> {
        let url = self.endpoint(path);
        log::debug!("POST {url} ({} fields)", fields.len());
        let resp = gloo_net::http::Request::post(&url)
            .json(fields)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let url = self.endpoint(path);
        log::debug!("POST {url}");
        gloo_net::http::Request::post(&url)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| ApiError::Request(e.to_string()))
    }
}

#[cfg(not(feature = "csr"))]
impl HttpApi {
    async fn get_json<T: DeserializeOwned>(&self, path: &str, require_ok: bool) -> Result<T, ApiError> {
        log::debug!("GET {} skipped (require_ok={require_ok})", self.endpoint(path));
        Err(ApiError::Unavailable)
    }

    async fn post_form<T: DeserializeOwned>(&self, path: &str, fields: &FormFields) -> Result<T, ApiError> {
        log::debug!("POST {} skipped ({} fields)", self.endpoint(path), fields.len());
        Err(ApiError::Unavailable)
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        log::debug!("POST {} skipped", self.endpoint(path));
        Err(ApiError::Unavailable)
    }
}
