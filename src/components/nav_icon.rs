use leptos::prelude::*;

use crate::menu::Icon;

#[component]
pub fn NavIcon(icon: Icon) -> impl IntoView {
    view! {
        <svg class="nav-icon" viewBox="0 0 24 24" width="24" height="24" fill="currentColor" aria-hidden="true">
            <path d=icon.path() />
        </svg>
    }
}
