//! Resource list view model.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use leptos::prelude::{RwSignal, Set};

use crate::net::api::ApiError;
use crate::net::types::{Resource, ResourceList};
use crate::util::route::Route;

pub const EMPTY_RESOURCES_TEXT: &str = "No resources available";

/// One card in `#resourcesList`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceListItem {
    pub id: u64,
    pub name: String,
    pub access_level: String,
    pub available_hours: String,
    pub href: String,
}

impl ResourceListItem {
    pub fn from_resource(resource: Resource) -> Self {
        Self {
            href: Route::ResourceDetail(resource.id).href(),
            id: resource.id,
            name: resource.name,
            access_level: resource.access_level,
            available_hours: resource.available_hours,
        }
    }

    pub fn access_line(&self) -> String {
        format!("Access level: {}", self.access_level)
    }

    pub fn hours_line(&self) -> String {
        format!("Available hours: {}", self.available_hours)
    }
}

/// Full contents of `#resourcesList`; every load replaces it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourcesView {
    Empty,
    Cards(Vec<ResourceListItem>),
}

impl ResourcesView {
    pub fn from_list(list: ResourceList) -> Self {
        match list.resources {
            Some(resources) if !resources.is_empty() => {
                Self::Cards(resources.into_iter().map(ResourceListItem::from_resource).collect())
            }
            _ => Self::Empty,
        }
    }

    pub fn card_count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Cards(cards) => cards.len(),
        }
    }
}

/// Replace the list with a fresh result; a failed load keeps what is shown.
pub fn apply_listing(listing: RwSignal<Option<ResourcesView>>, result: Result<ResourcesView, ApiError>) {
    match result {
        Ok(view) => listing.set(Some(view)),
        Err(err) => log::warn!("resource list request failed: {err}"),
    }
}
