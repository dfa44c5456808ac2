//! Page shell: header, sidebar, mobile backdrop and routed content.
//!
//! Owns the layout flags: provides them as context and passes them to the
//! sidebar as a prop.

use leptos::prelude::*;

use crate::components::header::AppHeader;
use crate::components::sidebar::Sidebar;
use crate::layout::provide_sidebar_context;
use crate::menu::NavMenu;

#[component]
pub fn AppLayout(
    /// Navigation entries for the sidebar.
    menu: NavMenu,
    children: Children,
) -> impl IntoView {
    let layout = provide_sidebar_context();

    layout.sync_viewport();
    let _resize = window_event_listener(leptos::ev::resize, move |_| layout.sync_viewport());

    view! {
        <div class="app-layout">
            <style>{include_str!("app_layout.css")}</style>
            <Sidebar menu=menu layout=layout />
            <Show when=move || layout.is_mobile_open()>
                <div class="backdrop" on:click=move |_| layout.close_mobile()></div>
            </Show>
            <div
                class="main-column"
                class:main-column-wide=move || {
                    let flags = layout.flags();
                    flags.expanded || flags.hovered
                }
            >
                <AppHeader />
                <main class="content">{children()}</main>
            </div>
        </div>
    }
}
