use crate::app::routes::Route;
use dioxus::prelude::*;

/// Site root. The sidebar's "Back to Home" link lands here.
#[component]
pub fn Landing() -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Task Hub" }
            Link { to: Route::DashboardHome {}, class: "c-page__cta", "Open dashboard" }
        }
    }
}

/// Redirect target of the auth gate. The actual login form (and the writes
/// to the session store) belong to the auth flow, outside this shell.
#[component]
pub fn Login() -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Sign in" }
            p { class: "c-page__hint", "You need an active session to view the dashboard." }
        }
    }
}
