use leptos::prelude::*;

use crate::render::Badge;

/// Small "new" / "pro" marker next to a submenu row.
#[component]
pub fn NavBadge(
    badge: Badge,
    /// Whether the row carrying the badge is the active route
    active: bool,
) -> impl IntoView {
    let class = match badge {
        Badge::New => "nav-badge nav-badge-new",
        Badge::Pro => "nav-badge nav-badge-pro",
    };

    view! {
        <span class=class class:nav-badge-active=active>
            {badge.label()}
        </span>
    }
}
