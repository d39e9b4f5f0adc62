//! Login page: `#loginForm` posts its fields to `/api/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::components::status_line::StatusLine;
use crate::config::ClientConfig;
use crate::net::api::{ApiError, HttpApi, PortalApi};
use crate::state::submission::{FormOutcome, StatusMessage, apply_outcome};
use crate::util::command::BrowserScheduler;
use crate::util::form::{FormFields, intercept_submit};
use crate::util::route::Route;

/// Send the login form and build the feedback. On success the outcome
/// carries a redirect to `/resources` after `delay`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the reply is not JSON.
pub async fn submit_login<A: PortalApi + ?Sized>(
    api: &A,
    fields: &FormFields,
    delay: Duration,
) -> Result<FormOutcome, ApiError> {
    let result = api.login(fields).await?;
    log::info!("login {}", if result.success { "accepted" } else { "rejected" });
    Ok(FormOutcome::from_result(&result, &Route::Resources, delay))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let delay = expect_context::<ClientConfig>().redirect_delay;
    let message = RwSignal::new(None::<StatusMessage>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        let fields = intercept_submit(&ev);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            apply_outcome(message, submit_login(&api, &fields, delay).await, &BrowserScheduler, "login");
        });
    };

    view! {
        <section class="login-page">
            <h1>"Log in"</h1>
            <form id="loginForm" class="auth-form" on:submit=on_submit>
                <input class="auth-form__input" type="text" name="username" placeholder="Username"/>
                <input class="auth-form__input" type="password" name="password" placeholder="Password"/>
                <button class="btn auth-form__submit" type="submit">"Log in"</button>
            </form>
            <StatusLine message/>
            <p class="auth-form__alt">
                "No account? "
                <a href=Route::Register.href()>"Register"</a>
            </p>
        </section>
    }
}
