// Custom Dioxus hooks
pub mod use_layout_state;
pub mod use_session_guard;

pub use use_layout_state::{use_layout_state, ShellLayout};
pub use use_session_guard::use_session_guard;
