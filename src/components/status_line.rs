//! `#message` feedback line shared by the login and register forms.

use leptos::prelude::*;

use crate::state::submission::StatusMessage;

/// Renders the last server message; empty and unstyled until one arrives.
#[component]
pub fn StatusLine(message: RwSignal<Option<StatusMessage>>) -> impl IntoView {
    view! {
        <p
            id="message"
            class=move || message.get().map(|m| m.style.class_name()).unwrap_or_default()
        >
            {move || message.get().map(|m| m.text).unwrap_or_default()}
        </p>
    }
}
