// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod layout;
pub mod navigation;
pub mod session;

pub use layout::{
    render_policy, ContentInset, LayoutState, OverlayState, RailState, RenderPolicy, Viewport,
};
pub use navigation::{
    all_entries, EntryStatus, NavEntry, NavIcon, PRIMARY_ENTRIES, SETTINGS_ENTRIES,
};
pub use session::{GateDecision, SessionMarker, LOGIN_ROUTE, TOKEN_KEY, USER_ID_KEY};
