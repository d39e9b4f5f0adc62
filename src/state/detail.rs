//! Single-resource view model for `/resource/{id}`.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use leptos::prelude::{RwSignal, Set};

use crate::net::api::ApiError;
use crate::net::types::ResourceDetail;

pub const NOT_FOUND_TEXT: &str = "Resource not found";
pub const DENIED_FALLBACK_TEXT: &str = "Access denied";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailView {
    Found {
        name: String,
        description: String,
        access_level: String,
        available_hours: String,
    },
    /// Denied or missing; the server's message (or a fallback) is shown.
    Unavailable { message: String },
}

impl DetailView {
    pub fn from_response(detail: ResourceDetail) -> Self {
        if !detail.success {
            return Self::Unavailable {
                message: detail.message.unwrap_or_else(|| DENIED_FALLBACK_TEXT.to_owned()),
            };
        }
        Self::Found {
            name: detail.name.unwrap_or_default(),
            description: detail.description.unwrap_or_default(),
            access_level: detail.access_level.unwrap_or_default(),
            available_hours: detail.available_hours.unwrap_or_default(),
        }
    }

    pub fn not_found() -> Self {
        Self::Unavailable { message: NOT_FOUND_TEXT.to_owned() }
    }
}

pub fn apply_detail(detail: RwSignal<Option<DetailView>>, result: Result<DetailView, ApiError>) {
    match result {
        Ok(view) => detail.set(Some(view)),
        Err(err) => log::warn!("resource detail request failed: {err}"),
    }
}
