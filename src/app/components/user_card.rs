use crate::app::components::nav_entry::nav_icon_glyph;
use crate::domain::models::NavIcon;
use dioxus::prelude::*;

/// User card pinned to the sidebar bottom. Display only: the logout glyph is
/// an affordance for the login flow to wire up - this shell never touches
/// the session store.
#[component]
pub fn UserCard() -> Element {
    rsx! {
        div { class: "c-user-card",
            div { class: "c-user-card__avatar", "JD" }
            div { class: "c-user-card__identity",
                p { class: "c-user-card__name", "John Doe" }
                p { class: "c-user-card__email", "john@example.com" }
            }
            span { class: "c-user-card__logout", {nav_icon_glyph(NavIcon::Logout)} }
        }
    }
}
