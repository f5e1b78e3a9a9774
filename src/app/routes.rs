use crate::app::layouts::Sidebar;
use crate::app::pages::{AiAssistant, DashboardHome, Landing, Login, TasksPage};
use crate::shared::hooks::{use_layout_state, use_session_guard};
use dioxus::document;
use dioxus::prelude::*;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Public routes (no shell, no gate)
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},

    // Protected dashboard area, wrapped by the shell
    #[layout(DashboardShell)]
    #[route("/dashboard")]
    DashboardHome {},
    #[route("/dashboard/ai")]
    AiAssistant {},
    #[route("/dashboard/tasks")]
    TasksPage {},
}

impl Route {
    /// Typed route for a navigation-entry path. `None` for placeholder paths
    /// that have no page yet.
    pub fn for_nav_path(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Landing {}),
            "/dashboard" => Some(Route::DashboardHome {}),
            "/dashboard/ai" => Some(Route::AiAssistant {}),
            "/dashboard/tasks" => Some(Route::TasksPage {}),
            _ => None,
        }
    }
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Dashboard app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

/// Persistent layout around every dashboard page: auth gate, sidebar,
/// mobile menu button, dismiss scrim and the content outlet.
///
/// The two layout flags live here and die with this mount. The viewport
/// split (overlay below the `lg` breakpoint, in-flow rail above it) is
/// resolved by the stylesheet's media query; this component only emits the
/// state as modifier classes.
#[component]
pub fn DashboardShell() -> Element {
    // Bundled by build.rs from assets/css/
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    use_session_guard();
    let mut layout = use_layout_state();
    let state = layout.state();

    rsx! {
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        }
        div { class: "c-shell",
            // Mobile menu affordance, fixed above the sidebar
            button {
                class: "c-shell__menu",
                aria_label: "Toggle navigation",
                onclick: move |_| layout.toggle_overlay(),
                "☰"
            }

            Sidebar { layout }

            // Dismiss scrim: rendered only while the overlay is open, so a
            // tap can only ever close it
            if state.overlay_open() {
                div {
                    class: "c-shell__scrim",
                    onclick: move |_| layout.dismiss_overlay(),
                }
            }

            // Content inset is fixed to the expanded sidebar width on wide
            // viewports even in rail mode (see ContentInset::ExpandedWidth)
            main { class: "c-shell__main",
                div { class: "c-shell__content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::all_entries;

    #[test]
    fn test_every_active_entry_has_a_route() {
        for entry in all_entries().filter(|e| e.is_active()) {
            assert!(
                Route::for_nav_path(entry.path).is_some(),
                "active entry {} must resolve to a typed route",
                entry.path
            );
        }
    }

    #[test]
    fn test_placeholder_paths_have_no_route() {
        for entry in all_entries().filter(|e| !e.is_active()) {
            assert!(Route::for_nav_path(entry.path).is_none());
        }
    }

    #[test]
    fn test_login_route_matches_gate_target() {
        use crate::domain::models::LOGIN_ROUTE;
        assert_eq!(Route::Login {}.to_string(), LOGIN_ROUTE);
    }
}
