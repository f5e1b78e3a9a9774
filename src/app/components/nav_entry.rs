use crate::app::routes::Route;
use crate::domain::models::{EntryStatus, NavEntry, NavIcon};
use dioxus::prelude::*;

/// Glyph for a named icon reference (emoji, same as the rest of the app
/// chrome). Artwork is presentation only - entries reference icons by name.
pub fn nav_icon_glyph(icon: NavIcon) -> &'static str {
    match icon {
        NavIcon::Home => "🏠",
        NavIcon::Assistant => "🤖",
        NavIcon::Tasks => "✅",
        NavIcon::Calendar => "📅",
        NavIcon::Analytics => "📊",
        NavIcon::Team => "👥",
        NavIcon::Settings => "⚙️",
        NavIcon::Notifications => "🔔",
        NavIcon::BackArrow => "←",
        NavIcon::Logout => "⎋",
    }
}

/// One sidebar row. Active entries are real links; ComingSoon entries keep
/// identical visual weight but are plain divs with a badge. The badge and
/// label are hidden in rail mode by the stylesheet, never removed here.
#[component]
pub fn NavEntryItem(entry: NavEntry) -> Element {
    let glyph = nav_icon_glyph(entry.icon);

    match entry.status {
        EntryStatus::Active => {
            let Some(route) = Route::for_nav_path(entry.path) else {
                // An Active entry without a page is a wiring mistake; render
                // it inert rather than emitting a dead link.
                tracing::warn!(path = entry.path, "active nav entry has no route");
                return rsx! {
                    div { class: "c-nav-entry",
                        span { class: "c-nav-entry__icon", {glyph} }
                        span { class: "c-nav-entry__label", "{entry.label}" }
                    }
                };
            };
            rsx! {
                Link {
                    to: route,
                    class: "c-nav-entry c-nav-entry--active",
                    span { class: "c-nav-entry__icon", {glyph} }
                    span { class: "c-nav-entry__label", "{entry.label}" }
                }
            }
        }
        EntryStatus::ComingSoon => rsx! {
            div { class: "c-nav-entry c-nav-entry--soon",
                span { class: "c-nav-entry__icon", {glyph} }
                span { class: "c-nav-entry__label", "{entry.label}" }
                span { class: "c-nav-entry__badge", "Coming Soon" }
            }
        },
    }
}
