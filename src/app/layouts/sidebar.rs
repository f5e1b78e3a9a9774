use crate::app::components::{nav_icon_glyph, NavEntryItem, UserCard};
use crate::app::routes::Route;
use crate::domain::models::{NavIcon, PRIMARY_ENTRIES, SETTINGS_ENTRIES};
use crate::shared::hooks::ShellLayout;
use dioxus::prelude::*;

/// Sidebar: back-home link, brand header with the collapse affordance, the
/// two navigation groups and the pinned user card.
///
/// Modifier classes carry the layout state; the stylesheet decides which one
/// applies on which side of the breakpoint (`is-open` only matters below
/// `lg`, `is-collapsed` only above it).
#[component]
pub fn Sidebar(layout: ShellLayout) -> Element {
    let mut layout = layout;
    let state = layout.state();

    let mut aside_class = String::from("c-sidebar");
    if state.overlay_open() {
        aside_class.push_str(" is-open");
    }
    if state.rail_collapsed() {
        aside_class.push_str(" is-collapsed");
    }

    rsx! {
        aside { class: "{aside_class}",
            // Back to the site root, outside the dashboard group
            Link {
                to: Route::Landing {},
                class: "c-sidebar__back",
                span { class: "c-sidebar__icon", {nav_icon_glyph(NavIcon::BackArrow)} }
                span { class: "c-sidebar__label", "Back to Home" }
            }

            // Brand row shares space with the desktop collapse button; the
            // button is hidden below the breakpoint by the stylesheet
            div { class: "c-sidebar__header",
                span { class: "c-sidebar__brand", "Task Hub" }
                button {
                    class: "c-sidebar__collapse",
                    aria_label: "Collapse sidebar",
                    onclick: move |_| layout.toggle_rail(),
                    "☰"
                }
            }

            nav { class: "c-sidebar__nav",
                for entry in PRIMARY_ENTRIES.iter() {
                    NavEntryItem { entry: *entry }
                }
            }

            div { class: "c-sidebar__section",
                h3 { class: "c-sidebar__section-title", "Settings" }
                nav { class: "c-sidebar__nav",
                    for entry in SETTINGS_ENTRIES.iter() {
                        NavEntryItem { entry: *entry }
                    }
                }
            }

            UserCard {}
        }
    }
}
