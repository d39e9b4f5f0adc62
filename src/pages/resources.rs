//! Resource list page for `/resources`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list request runs on mount, concurrently with the header's session
//! check. `#resourcesList` is replaced wholesale with each result; a failed
//! request leaves it as it was.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use leptos::prelude::*;

use crate::components::resource_card::ResourceCard;
use crate::net::api::{ApiError, HttpApi, PortalApi};
use crate::state::resources::{EMPTY_RESOURCES_TEXT, ResourcesView, apply_listing};

/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server answers with a
/// non-success status, or the body is not a resource list.
pub async fn load_resources<A: PortalApi + ?Sized>(api: &A) -> Result<ResourcesView, ApiError> {
    let list = api.list_resources().await?;
    let view = ResourcesView::from_list(list);
    log::debug!("resource list loaded: {} cards", view.card_count());
    Ok(view)
}

#[component]
pub fn ResourcesPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let listing = RwSignal::new(None::<ResourcesView>);

    leptos::task::spawn_local(async move {
        apply_listing(listing, load_resources(&api).await);
    });

    view! {
        <section class="resources-page">
            <h1>"Resources"</h1>
            <div id="resourcesList" class="resources-page__list">
                {move || match listing.get() {
                    None => ().into_any(),
                    Some(ResourcesView::Empty) => view! { <p>{EMPTY_RESOURCES_TEXT}</p> }.into_any(),
                    Some(ResourcesView::Cards(items)) => items
                        .into_iter()
                        .map(|item| view! { <ResourceCard item/> })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </section>
    }
}
