//! Page header with the session identity and logout control.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header is mounted once per page load, so it owns the session check:
//! it issues `GET /api/check` on mount and is the only writer of the
//! `#username` and `#logoutBtn` elements.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::net::api::{HttpApi, PortalApi};
use crate::state::auth::AuthState;
use crate::util::command::{BrowserScheduler, Command, Scheduler};
use crate::util::route::Route;

/// Query the session and build the header identity. Never fails: an
/// unreachable server looks logged out.
pub async fn check_auth<A: PortalApi + ?Sized>(api: &A) -> AuthState {
    AuthState::from_check(api.check_session().await)
}

/// End the session and return the redirect home. The redirect happens
/// whatever the logout endpoint answers.
pub async fn logout<A: PortalApi + ?Sized>(api: &A) -> Command {
    if let Err(err) = api.logout().await {
        log::warn!("logout request failed: {err}");
    }
    Command::Navigate(Route::Home.href())
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let api = expect_context::<HttpApi>();

    let check_api = api.clone();
    leptos::task::spawn_local(async move {
        auth.set(check_auth(&check_api).await);
    });

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            BrowserScheduler.schedule(logout(&api).await);
        });
    };

    view! {
        <header class="site-header">
            <a class="site-header__home" href=Route::Home.href()>"Resource Portal"</a>
            <span class="site-header__spacer"></span>
            <span id="username" class="site-header__user">{move || auth.get().username_text()}</span>
            <span id="subscription" class="site-header__tier">
                {move || auth.get().subscription_level.unwrap_or_default()}
            </span>
            <button
                id="logoutBtn"
                class="btn site-header__logout"
                style:display=move || auth.get().logout_display()
                on:click=on_logout
            >
                "Logout"
            </button>
        </header>
    }
}
