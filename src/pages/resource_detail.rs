//! Resource detail page for `/resource/{id}`.

#[cfg(test)]
#[path = "resource_detail_test.rs"]
mod resource_detail_test;

use leptos::prelude::*;

use crate::net::api::{ApiError, HttpApi, PortalApi};
use crate::state::detail::{DetailView, apply_detail};
use crate::util::route::Route;

/// Load one resource. Denials decode into [`DetailView::Unavailable`].
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is not JSON.
pub async fn load_detail<A: PortalApi + ?Sized>(api: &A, id: u64) -> Result<DetailView, ApiError> {
    let detail = api.resource_detail(id).await?;
    Ok(DetailView::from_response(detail))
}

/// Mounted by the app only for paths that parse as `/resource/{id}`.
#[component]
pub fn ResourceDetailPage(id: u64) -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let detail = RwSignal::new(None::<DetailView>);

    leptos::task::spawn_local(async move {
        apply_detail(detail, load_detail(&api, id).await);
    });

    view! {
        <section class="resource-detail-page">
            <div id="resourceDetail">
                {move || match detail.get() {
                    None => ().into_any(),
                    Some(DetailView::Found { name, description, access_level, available_hours }) => {
                        view! {
                            <h1>{name}</h1>
                            <p class="resource-detail__description">{description}</p>
                            <p>{format!("Access level: {access_level}")}</p>
                            <p>{format!("Available hours: {available_hours}")}</p>
                        }
                            .into_any()
                    }
                    Some(DetailView::Unavailable { message }) => {
                        view! { <p class="error">{message}</p> }.into_any()
                    }
                }}
            </div>
            <a href=Route::Resources.href()>"Back to resources"</a>
        </section>
    }
}
