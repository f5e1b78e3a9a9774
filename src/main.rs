//! Task Hub Dashboard - Main Entry Point
//!
//! Serves the Dioxus application with SSR on the server and hydrates it in
//! the browser. Uses the dioxus::serve() pattern for dx serve compatibility.

use task_hub_dashboard::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    use tower_http::trace::TraceLayer;

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Task Hub dashboard...");

    dioxus::serve(|| {
        async move {
            // The shell has no API surface of its own; the SSR router plus
            // request tracing is the whole server.
            let router = dioxus::server::router(App).layer(TraceLayer::new_for_http());
            Ok(router)
        }
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Task Hub dashboard initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
