use leptos::prelude::*;

/// Viewports narrower than this use the slide-in mobile drawer.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// The layout flags the sidebar renders from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutFlags {
    pub expanded: bool,
    pub mobile_open: bool,
    pub hovered: bool,
}

impl LayoutFlags {
    /// Labels, chevrons and submenus are visible only in the wide sidebar.
    pub fn shows_labels(self) -> bool {
        self.expanded || self.hovered || self.mobile_open
    }
}

/// State owned by the layout shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutState {
    pub expanded: bool,
    pub mobile_open: bool,
    pub hovered: bool,
    pub is_mobile: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            expanded: true,
            mobile_open: false,
            hovered: false,
            is_mobile: false,
        }
    }
}

impl LayoutState {
    pub fn flags(&self) -> LayoutFlags {
        LayoutFlags {
            expanded: self.expanded,
            mobile_open: self.mobile_open,
            hovered: self.hovered,
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn close_mobile(&mut self) {
        self.mobile_open = false;
    }

    /// The header button drives the drawer on mobile and the width on desktop.
    pub fn toggle_for_viewport(&mut self) {
        if self.is_mobile {
            self.toggle_mobile();
        } else {
            self.toggle_sidebar();
        }
    }

    /// Hovering only widens a collapsed sidebar.
    pub fn hover_enter(&mut self) {
        if !self.expanded {
            self.hovered = true;
        }
    }

    pub fn hover_leave(&mut self) {
        self.hovered = false;
    }

    pub fn viewport_resized(&mut self, width_px: f64) {
        self.is_mobile = width_px < MOBILE_BREAKPOINT_PX;
        if !self.is_mobile {
            self.mobile_open = false;
        }
    }
}

/// Shared layout flags handed to the sidebar and header.
#[derive(Clone, Copy)]
pub struct SidebarContext {
    pub state: RwSignal<LayoutState>,
}

impl SidebarContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(LayoutState::default()),
        }
    }

    /// Tracked read of the current flags.
    pub fn flags(&self) -> LayoutFlags {
        self.state.with(LayoutState::flags)
    }

    pub fn is_mobile_open(&self) -> bool {
        self.state.with(|s| s.mobile_open)
    }

    pub fn set_hovered(&self, hovered: bool) {
        self.state.update(|s| {
            if hovered {
                s.hover_enter();
            } else {
                s.hover_leave();
            }
        });
    }

    pub fn toggle_for_viewport(&self) {
        self.state.update(LayoutState::toggle_for_viewport);
    }

    pub fn close_mobile(&self) {
        self.state.update(LayoutState::close_mobile);
    }

    /// Re-read the window width and update the mobile flags.
    pub fn sync_viewport(&self) {
        let width = web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width: wasm_bindgen::JsValue| width.as_f64());
        if let Some(width) = width {
            self.state.update(|s| s.viewport_resized(width));
        }
    }
}

/// Create the layout flags and make them available to descendants.
pub fn provide_sidebar_context() -> SidebarContext {
    let layout = SidebarContext::new();
    provide_context(layout);
    layout
}

impl Default for SidebarContext {
    fn default() -> Self {
        Self::new()
    }
}
