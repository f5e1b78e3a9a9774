use dioxus::prelude::*;

// Dashboard child pages. The shell treats them as opaque content; these are
// route targets, not the product of this crate.

#[component]
pub fn DashboardHome() -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Home" }
            p { class: "c-page__hint", "Your workspace at a glance." }
        }
    }
}

#[component]
pub fn AiAssistant() -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "AI Assistant" }
            p { class: "c-page__hint", "Ask anything about your tasks." }
        }
    }
}

#[component]
pub fn TasksPage() -> Element {
    rsx! {
        section { class: "c-page",
            h1 { class: "c-page__title", "Tasks" }
            p { class: "c-page__hint", "Everything assigned to you." }
        }
    }
}
