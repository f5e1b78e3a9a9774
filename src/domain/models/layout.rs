use serde::{Deserialize, Serialize};

/// Mobile slide-in sidebar visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayState {
    Open,
    Closed,
}

impl OverlayState {
    pub fn flipped(self) -> Self {
        match self {
            OverlayState::Open => OverlayState::Closed,
            OverlayState::Closed => OverlayState::Open,
        }
    }
}

/// Desktop sidebar width mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RailState {
    Expanded,
    Collapsed,
}

impl RailState {
    pub fn flipped(self) -> Self {
        match self {
            RailState::Expanded => RailState::Collapsed,
            RailState::Collapsed => RailState::Expanded,
        }
    }
}

/// The shell's layout state: two orthogonal flags, every combination valid.
///
/// `overlay` only matters on narrow viewports, `rail` only on wide ones, but
/// the state machine itself knows nothing about breakpoints - that mapping
/// lives in [`RenderPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutState {
    pub overlay: OverlayState,
    pub rail: RailState,
}

impl Default for LayoutState {
    fn default() -> Self {
        LayoutState {
            overlay: OverlayState::Closed,
            rail: RailState::Expanded,
        }
    }
}

impl LayoutState {
    /// Menu-button transition: flips the mobile overlay.
    pub fn toggle_overlay(&mut self) {
        self.overlay = self.overlay.flipped();
    }

    /// Collapse-button transition: flips the desktop rail.
    pub fn toggle_rail(&mut self) {
        self.rail = self.rail.flipped();
    }

    /// Scrim-tap transition: closes the overlay. The scrim never opens it,
    /// so this is a no-op while already closed.
    pub fn dismiss_overlay(&mut self) {
        self.overlay = OverlayState::Closed;
    }

    pub fn overlay_open(&self) -> bool {
        self.overlay == OverlayState::Open
    }

    pub fn rail_collapsed(&self) -> bool {
        self.rail == RailState::Collapsed
    }
}

/// Environment-derived viewport class. Not stored anywhere: the browser
/// resolves it through media queries, tests pass it explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Narrow,
    Wide,
}

/// Left inset applied to the main content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentInset {
    /// Content starts at the viewport edge (sidebar is an overlay).
    None,
    /// Content is inset by the full expanded sidebar width. This holds even
    /// while the rail is collapsed - the content area does not resize when
    /// the sidebar narrows. Intentional, observable behavior.
    ExpandedWidth,
}

/// What the sidebar and content area should look like for a given viewport
/// and layout state. Pure presentation intent, no CSS knowledge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPolicy {
    /// Sidebar translated into view (always true on wide viewports).
    pub sidebar_in_view: bool,
    /// Full-screen dismiss scrim (narrow viewports only, overlay open only).
    pub scrim_visible: bool,
    /// Entry labels, section headers and badges shown.
    pub labels_visible: bool,
    /// Icons rendered at the larger rail size.
    pub icons_enlarged: bool,
    pub content_inset: ContentInset,
}

/// Maps `(viewport, state)` to presentation intent. The component tree emits
/// this as CSS class selection; this function is the testable statement of
/// what those classes mean.
pub fn render_policy(viewport: Viewport, state: LayoutState) -> RenderPolicy {
    match viewport {
        Viewport::Narrow => RenderPolicy {
            sidebar_in_view: state.overlay_open(),
            scrim_visible: state.overlay_open(),
            // Rail state has no visual effect below the breakpoint.
            labels_visible: true,
            icons_enlarged: false,
            content_inset: ContentInset::None,
        },
        Viewport::Wide => RenderPolicy {
            sidebar_in_view: true,
            scrim_visible: false,
            labels_visible: !state.rail_collapsed(),
            icons_enlarged: state.rail_collapsed(),
            content_inset: ContentInset::ExpandedWidth,
        },
    }
}
