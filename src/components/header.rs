use leptos::prelude::*;

use crate::layout::SidebarContext;

#[component]
pub fn AppHeader() -> impl IntoView {
    let layout = expect_context::<SidebarContext>();

    view! {
        <header class="app-header">
            <button
                type="button"
                class="sidebar-toggle"
                aria-label="Mostrar u ocultar el menú"
                on:click=move |_| layout.toggle_for_viewport()
            >
                <svg viewBox="0 0 24 24" width="24" height="24" fill="currentColor" aria-hidden="true">
                    <path d="M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z" />
                </svg>
            </button>
            <span class="app-header-title">"Cartera Castigada"</span>
        </header>
    }
}
