//! Registration page: `#registerForm` posts its fields to `/api/register`
//! and sends the user to the login page once the account exists.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::components::status_line::StatusLine;
use crate::config::ClientConfig;
use crate::net::api::{ApiError, HttpApi, PortalApi};
use crate::state::submission::{FormOutcome, StatusMessage, apply_outcome};
use crate::util::command::BrowserScheduler;
use crate::util::form::{FormFields, intercept_submit};
use crate::util::route::Route;

/// Send the registration form and build the feedback. On success the outcome
/// carries a redirect to `/login` after `delay`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the reply is not JSON.
pub async fn submit_register<A: PortalApi + ?Sized>(
    api: &A,
    fields: &FormFields,
    delay: Duration,
) -> Result<FormOutcome, ApiError> {
    let result = api.register(fields).await?;
    log::info!("registration {}", if result.success { "accepted" } else { "rejected" });
    Ok(FormOutcome::from_result(&result, &Route::Login, delay))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<HttpApi>();
    let delay = expect_context::<ClientConfig>().redirect_delay;
    let message = RwSignal::new(None::<StatusMessage>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        let fields = intercept_submit(&ev);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            apply_outcome(message, submit_register(&api, &fields, delay).await, &BrowserScheduler, "register");
        });
    };

    view! {
        <section class="register-page">
            <h1>"Register"</h1>
            <form id="registerForm" class="auth-form" on:submit=on_submit>
                <input class="auth-form__input" type="text" name="username" placeholder="Username"/>
                <input class="auth-form__input" type="password" name="password" placeholder="Password"/>
                <select class="auth-form__input" name="subscription_level">
                    <option value="basic" selected>"Basic"</option>
                    <option value="premium">"Premium"</option>
                </select>
                <button class="btn auth-form__submit" type="submit">"Create account"</button>
            </form>
            <StatusLine message/>
            <p class="auth-form__alt">
                "Already registered? "
                <a href=Route::Login.href()>"Log in"</a>
            </p>
        </section>
    }
}
