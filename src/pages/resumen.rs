use leptos::prelude::*;

#[component]
pub fn ResumenPage() -> impl IntoView {
    view! {
        <div class="page resumen-page">
            <h2>"Reportes y Análisis"</h2>
            <p class="page-description">
                "Resumen de indicadores y reportes de la cartera."
            </p>
        </div>
    }
}
