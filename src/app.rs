use leptos::logging::error;
use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::app_layout::AppLayout;
use crate::menu::{default_menu, NavMenu};
use crate::pages::cartera::CarteraPage;
use crate::pages::resumen::ResumenPage;

#[component]
pub fn App() -> impl IntoView {
    // A broken menu config leaves the sidebar empty instead of taking the page down
    let menu = default_menu().unwrap_or_else(|err| {
        error!("sidebar menu config is invalid: {err}");
        NavMenu::default()
    });

    view! {
        <Router>
            <AppLayout menu=menu>
                <Routes fallback=|| view! { <p>"Página no encontrada"</p> }>
                    <Route path=path!("/") view=CarteraPage />
                    <Route path=path!("/resumen") view=ResumenPage />
                </Routes>
            </AppLayout>
        </Router>
    }
}
