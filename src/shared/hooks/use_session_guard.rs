use dioxus::prelude::*;

/// Mount-time auth gate: reads the session marker once and redirects to the
/// login route when it is incomplete.
///
/// Runs once per shell mount, not on child updates, and is not a live
/// subscription - a session invalidated in another tab goes unnoticed until
/// remount. The check does not block the first render pass; a brief flash of
/// shell chrome before the redirect is expected. UX affordance only: the
/// server revalidates every protected resource on its own.
pub fn use_session_guard() {
    let navigator = use_navigator();

    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            use crate::app::routes::Route;
            use crate::shared::session_store::{run_gate, BrowserSessionStore};

            run_gate(&BrowserSessionStore, |_target| {
                // Repeated pushes to the same route are a no-op in the
                // router, so the gate stays idempotent across remounts.
                navigator.push(Route::Login {});
            });
        }

        // Server-side rendering has no browsing-context storage; the gate
        // runs after hydration.
        #[cfg(not(target_arch = "wasm32"))]
        let _ = navigator;
    });
}
