use leptos::prelude::*;

#[component]
pub fn CarteraPage() -> impl IntoView {
    view! {
        <div class="page cartera-page">
            <h2>"Cartera Castigada"</h2>
            <p class="page-description">
                "Seguimiento de la cartera castigada y su recuperación."
            </p>
        </div>
    }
}
