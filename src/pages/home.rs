//! Landing page.

use leptos::prelude::*;

use crate::util::route::Route;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1>"Resource Portal"</h1>
            <p>"Sign in to see the materials available to your account."</p>
            <nav class="home-page__links">
                <a href=Route::Login.href()>"Log in"</a>
                <a href=Route::Register.href()>"Register"</a>
                <a href=Route::Resources.href()>"Resources"</a>
            </nav>
        </section>
    }
}

/// Fallback for unknown paths.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="home-page">
            <p>"Page not found."</p>
            <a href=Route::Home.href()>"Home"</a>
        </section>
    }
}
