use crate::domain::models::LayoutState;
use crate::shared::logging;
use dioxus::prelude::*;

/// Shell layout state handle. Owned exclusively by the shell instance that
/// created it - never shared across shells, never persisted.
#[derive(Clone, Copy, PartialEq)]
pub struct ShellLayout {
    state: Signal<LayoutState>,
}

impl ShellLayout {
    /// Current state snapshot.
    pub fn state(&self) -> LayoutState {
        (self.state)()
    }

    /// Mobile menu button: flip the overlay.
    pub fn toggle_overlay(&mut self) {
        self.state.with_mut(|s| s.toggle_overlay());
        logging::log_layout_change("overlay", if self.state().overlay_open() { "open" } else { "closed" });
    }

    /// Desktop collapse button: flip the rail.
    pub fn toggle_rail(&mut self) {
        self.state.with_mut(|s| s.toggle_rail());
        logging::log_layout_change("rail", if self.state().rail_collapsed() { "collapsed" } else { "expanded" });
    }

    /// Scrim tap: close the overlay (never opens).
    pub fn dismiss_overlay(&mut self) {
        self.state.with_mut(|s| s.dismiss_overlay());
        logging::log_layout_change("overlay", "closed");
    }
}

/// Hook owning the two layout flags for one shell mount.
pub fn use_layout_state() -> ShellLayout {
    let state = use_signal(LayoutState::default);
    ShellLayout { state }
}
