//! Scripted in-memory `PortalApi` for page orchestration tests.

use std::cell::RefCell;

use async_trait::async_trait;

use super::api::{ApiError, PortalApi};
use super::types::{OperationResult, ResourceDetail, ResourceList, SessionStatus};
use crate::util::form::FormFields;

/// Returns canned responses and records every call it receives.
pub(crate) struct ScriptedApi {
    pub check: Result<SessionStatus, ApiError>,
    pub login: Result<OperationResult, ApiError>,
    pub register: Result<OperationResult, ApiError>,
    pub logout: Result<(), ApiError>,
    pub resources: Result<ResourceList, ApiError>,
    pub detail: Result<ResourceDetail, ApiError>,
    pub calls: RefCell<Vec<String>>,
    pub sent: RefCell<Vec<FormFields>>,
}

impl Default for ScriptedApi {
    fn default() -> Self {
        Self {
            check: Err(ApiError::Unavailable),
            login: Err(ApiError::Unavailable),
            register: Err(ApiError::Unavailable),
            logout: Err(ApiError::Unavailable),
            resources: Err(ApiError::Unavailable),
            detail: Err(ApiError::Unavailable),
            calls: RefCell::new(Vec::new()),
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl ScriptedApi {
    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl PortalApi for ScriptedApi {
    async fn check_session(&self) -> Result<SessionStatus, ApiError> {
        self.record("check");
        self.check.clone()
    }

    async fn login(&self, fields: &FormFields) -> Result<OperationResult, ApiError> {
        self.record("login");
        self.sent.borrow_mut().push(fields.clone());
        self.login.clone()
    }

    async fn register(&self, fields: &FormFields) -> Result<OperationResult, ApiError> {
        self.record("register");
        self.sent.borrow_mut().push(fields.clone());
        self.register.clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("logout");
        self.logout.clone()
    }

    async fn list_resources(&self) -> Result<ResourceList, ApiError> {
        self.record("resources");
        self.resources.clone()
    }

    async fn resource_detail(&self, id: u64) -> Result<ResourceDetail, ApiError> {
        self.record(format!("detail:{id}"));
        self.detail.clone()
    }
}
