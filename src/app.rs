//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{components::Router, hooks::use_location};

use crate::components::header::Header;
use crate::config::ClientConfig;
use crate::net::api::HttpApi;
use crate::pages::{
    home::{HomePage, NotFoundPage},
    login::LoginPage,
    register::RegisterPage,
    resource_detail::ResourceDetailPage,
    resources::ResourcesPage,
};
use crate::state::auth::AuthState;
use crate::util::route::Route;

/// Root application component.
///
/// Provides the config, HTTP client and session state to every page and
/// sets up client-side routing.
#[component]
pub fn App(#[prop(optional)] config: ClientConfig) -> impl IntoView {
    provide_meta_context();

    let api = HttpApi::new(config.api_base.clone());
    let auth = RwSignal::new(AuthState::default());

    provide_context(config);
    provide_context(api);
    provide_context(auth);

    view! {
        <Router>
            <Header/>
            <main class="page">
                <CurrentPage/>
            </main>
        </Router>
    }
}

/// Page and document title for the current path. [`Route::from_path`] is the
/// only matcher, so `/resources/` and `/resource/1/` fall through to the
/// not-found page.
#[component]
fn CurrentPage() -> impl IntoView {
    let pathname = use_location().pathname;

    move || {
        let route = Route::from_path(&pathname.get());
        log::debug!("rendering {route}");
        let page = match route {
            _ if route.loads_resources() => view! { <ResourcesPage/> }.into_any(),
            Route::Home => view! { <HomePage/> }.into_any(),
            Route::Login => view! { <LoginPage/> }.into_any(),
            Route::Register => view! { <RegisterPage/> }.into_any(),
            Route::ResourceDetail(id) => view! { <ResourceDetailPage id/> }.into_any(),
            Route::Resources | Route::NotFound => view! { <NotFoundPage/> }.into_any(),
        };
        view! {
            <Title text=route.title()/>
            {page}
        }
    }
}
