//! Card for one entry of the resource list.

use leptos::prelude::*;

use crate::state::resources::ResourceListItem;

#[component]
pub fn ResourceCard(item: ResourceListItem) -> impl IntoView {
    let access = item.access_line();
    let hours = item.hours_line();
    view! {
        <div class="resource-card" data-id=item.id.to_string()>
            <h3>{item.name}</h3>
            <p>{access}</p>
            <p>{hours}</p>
            <a href=item.href>"Details"</a>
        </div>
    }
}
