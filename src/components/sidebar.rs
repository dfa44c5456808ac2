use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::nav_badge::NavBadge;
use crate::components::nav_icon::NavIcon;
use crate::layout::SidebarContext;
use crate::menu::{Icon, MenuKind, NavMenu};
use crate::render::{submenu_height_style, ControlSnapshot, EntrySnapshot, SidebarSnapshot, SubEntrySnapshot};
use crate::submenu::{OpenSubmenu, SubmenuEvent, SubmenuHeights};

/// Collapsible navigation sidebar.
///
/// Tracks which submenu is open, following the current route and toggled
/// accordion-style by clicks. Everything visible is read from a
/// `SidebarSnapshot` rebuilt whenever the route, the open submenu or the
/// layout flags change.
#[component]
pub fn Sidebar(
    /// Navigation entries to render.
    menu: NavMenu,
    /// Shared layout flags owned by the layout shell.
    layout: SidebarContext,
) -> impl IntoView {
    let pathname = use_location().pathname;
    let (open, set_open) = signal(OpenSubmenu::Closed);
    let heights = RwSignal::new(SubmenuHeights::default());
    let entry_count = menu.section(MenuKind::Main).len();
    let menu = StoredValue::new(menu);

    // Resync the open submenu from the route on mount and on every navigation
    Effect::new(move |_| {
        let path = pathname.get();
        let next = menu.with_value(|m| open.get_untracked().apply(m, SubmenuEvent::RouteChanged(&path)));
        if let OpenSubmenu::OpenAt(key) = next {
            leptos::logging::log!("sidebar: route {} opens submenu {}", path, key.dom_id());
        }
        set_open.set(next);
    });

    let snapshot = Memo::new(move |_| {
        let current = pathname.get();
        menu.with_value(|m| SidebarSnapshot::build(m, open.get(), &current, layout.flags()))
    });

    let entries = (0..entry_count)
        .map(|index| {
            view! {
                <SidebarEntry
                    index=index
                    snapshot=snapshot
                    menu=menu
                    open=open
                    set_open=set_open
                    heights=heights
                />
            }
        })
        .collect_view();

    view! {
        <aside
            class=move || snapshot.with(|s| s.class.clone())
            on:mouseenter=move |_| layout.set_hovered(true)
            on:mouseleave=move |_| layout.set_hovered(false)
        >
            <style>{include_str!("sidebar.css")}</style>
            <div class="sidebar-header">
                <a href="/" class="sidebar-brand">
                    <img class="sidebar-logo" src=move || snapshot.with(|s| s.logo) alt="Cartera Castigada" />
                </a>
            </div>
            <nav class="sidebar-nav">
                <h2 class="menu-heading">
                    {move || match snapshot.with(|s| s.heading) {
                        Some(text) => view! { <span>{text}</span> }.into_any(),
                        None => view! { <NavIcon icon=Icon::HorizontalDots /> }.into_any(),
                    }}
                </h2>
                <ul class="menu-list">{entries}</ul>
            </nav>
        </aside>
    }
}

/// One top-level row. Whether it is a link or a toggle is fixed at mount;
/// label, highlight, chevron and rows follow the snapshot.
#[component]
fn SidebarEntry(
    index: usize,
    snapshot: Memo<SidebarSnapshot>,
    menu: StoredValue<NavMenu>,
    open: ReadSignal<OpenSubmenu>,
    set_open: WriteSignal<OpenSubmenu>,
    heights: RwSignal<SubmenuHeights>,
) -> impl IntoView {
    let entry = Memo::new(move |_| snapshot.with(|s| s.entries.get(index).cloned()));
    let Some(initial) = entry.get_untracked() else {
        return ().into_any();
    };

    let icon = initial.icon;
    let highlighted = move || entry.with(|e| e.as_ref().is_some_and(|e| e.highlighted));
    let label = move || {
        entry
            .with(|e| e.as_ref().and_then(|e| e.label.clone()))
            .map(|text| view! { <span class="menu-item-text">{text}</span> })
    };

    match initial.control {
        ControlSnapshot::Link { href } => view! {
            <li class="menu-entry">
                <a href=href class="menu-item" class:menu-item-active=highlighted>
                    <NavIcon icon=icon />
                    {label}
                </a>
            </li>
        }
        .into_any(),
        ControlSnapshot::Toggle { height_key: key, .. } => {
            let is_open = Memo::new(move |_| open.get().is_open(key));
            let chevron = Memo::new(move |_| entry.with(|e| e.as_ref().and_then(EntrySnapshot::chevron)));
            let rows = Memo::new(move |_| {
                entry.with(|e| e.as_ref().and_then(|e| e.sub_entries().map(<[_]>::to_vec)))
            });
            let list_shown = Memo::new(move |_| rows.with(Option::is_some));
            let submenu_ref = NodeRef::<leptos::html::Div>::new();

            // Measure the natural height whenever this submenu becomes the open one
            Effect::new(move |_| {
                if is_open.get() {
                    let measured = submenu_ref.get().map(|el| el.scroll_height());
                    heights.update(|h| h.record_measurement(key, measured));
                }
            });

            let toggle = move |_| {
                set_open.update(|state| {
                    *state = menu.with_value(|m| state.apply(m, SubmenuEvent::Toggled(key)));
                })
            };
            let height = move || heights.with(|h| submenu_height_style(h, key, is_open.get()));

            view! {
                <li class="menu-entry">
                    <button
                        type="button"
                        class="menu-item menu-toggle"
                        class:menu-item-active=highlighted
                        aria-expanded=move || is_open.get().to_string()
                        aria-controls=key.dom_id()
                        on:click=toggle
                    >
                        <NavIcon icon=icon />
                        {label}
                        {move || {
                            chevron.get().map(|rotated| {
                                view! {
                                    <span class="menu-chevron" class:menu-chevron-open=rotated>
                                        <NavIcon icon=Icon::ChevronDown />
                                    </span>
                                }
                            })
                        }}
                    </button>
                    <Show when=move || list_shown.get()>
                        <div
                            class="submenu"
                            id=key.dom_id()
                            node_ref=submenu_ref
                            style:height=height
                        >
                            <ul class="submenu-list">
                                {move || {
                                    rows.get()
                                        .unwrap_or_default()
                                        .into_iter()
                                        .map(submenu_row)
                                        .collect_view()
                                }}
                            </ul>
                        </div>
                    </Show>
                </li>
            }
            .into_any()
        }
    }
}

fn submenu_row(row: SubEntrySnapshot) -> impl IntoView {
    let active = row.active;
    view! {
        <li>
            <a href=row.href class="submenu-item" class:submenu-item-active=active>
                <span class="submenu-item-text">{row.label}</span>
                <span class="submenu-badges">
                    {row
                        .badges
                        .into_iter()
                        .map(|badge| view! { <NavBadge badge=badge active=active /> })
                        .collect_view()}
                </span>
            </a>
        </li>
    }
}
