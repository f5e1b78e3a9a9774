//! Read-only boundary to the browsing context's persistent key-value store.
//!
//! The session marker is written by the login flow and cleared by logout;
//! this crate never writes through this boundary.

use crate::domain::models::{GateDecision, SessionMarker, LOGIN_ROUTE, TOKEN_KEY, USER_ID_KEY};
use crate::shared::errors::Result;
use crate::shared::logging;

/// String-keyed lookups against the context-scoped store. Absence of a key
/// is a valid, non-error state meaning "not logged in".
pub trait SessionStore {
    fn read(&self, key: &str) -> Result<Option<String>>;
}

/// Evaluates the auth gate against a store. Pure over the trait: both halves
/// of the marker present yields `Continue`, anything else - a missing half or
/// an unreadable store - yields a redirect to the login route.
pub fn evaluate_session(store: &dyn SessionStore) -> GateDecision {
    let token = match store.read(TOKEN_KEY) {
        Ok(value) => value,
        Err(e) => {
            logging::log_store_unavailable(&e.to_string());
            return GateDecision::Redirect(LOGIN_ROUTE);
        }
    };
    let user_id = match store.read(USER_ID_KEY) {
        Ok(value) => value,
        Err(e) => {
            logging::log_store_unavailable(&e.to_string());
            return GateDecision::Redirect(LOGIN_ROUTE);
        }
    };

    match SessionMarker::from_parts(token, user_id) {
        Some(marker) => GateDecision::Continue(marker),
        None => GateDecision::Redirect(LOGIN_ROUTE),
    }
}

/// Runs the gate once: evaluates the store and invokes `redirect` at most
/// one time. This is the whole mount-time side effect; callers supply the
/// navigation primitive.
pub fn run_gate(store: &dyn SessionStore, mut redirect: impl FnMut(&'static str)) {
    match evaluate_session(store) {
        GateDecision::Continue(marker) => logging::log_gate_pass(&marker.user_id),
        GateDecision::Redirect(target) => {
            logging::log_gate_redirect(target);
            redirect(target);
        }
    }
}

/// `localStorage`-backed store. Unreadable storage (disabled, sandboxed
/// frame) surfaces as an error so the gate can fail closed.
#[cfg(target_arch = "wasm32")]
pub struct BrowserSessionStore;

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSessionStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        use crate::shared::errors::AppError;

        let storage = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or_else(|| AppError::StoreUnavailable("localStorage not accessible".into()))?;

        storage
            .get_item(key)
            .map_err(|_| AppError::StoreUnavailable(format!("failed to read key '{key}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;
    use std::collections::HashMap;

    struct MemoryStore(HashMap<&'static str, String>);

    impl MemoryStore {
        fn with(pairs: &[(&'static str, &str)]) -> Self {
            MemoryStore(pairs.iter().map(|(k, v)| (*k, v.to_string())).collect())
        }
    }

    impl SessionStore for MemoryStore {
        fn read(&self, key: &str) -> Result<Option<String>> {
            Ok(self.0.get(key).cloned())
        }
    }

    struct BrokenStore;

    impl SessionStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<String>> {
            Err(AppError::StoreUnavailable("storage disabled".into()))
        }
    }

    fn redirect_targets(store: &dyn SessionStore) -> Vec<&'static str> {
        let mut targets = Vec::new();
        run_gate(store, |target| targets.push(target));
        targets
    }

    #[test]
    fn test_full_marker_passes() {
        let store = MemoryStore::with(&[(TOKEN_KEY, "tok-1"), (USER_ID_KEY, "user-1")]);
        match evaluate_session(&store) {
            GateDecision::Continue(marker) => {
                assert_eq!(marker.token, "tok-1");
                assert_eq!(marker.user_id, "user-1");
            }
            other => panic!("expected Continue, got {other:?}"),
        }
        assert!(redirect_targets(&store).is_empty());
    }

    #[test]
    fn test_missing_token_redirects_once() {
        let store = MemoryStore::with(&[(USER_ID_KEY, "user-1")]);
        assert!(evaluate_session(&store).is_redirect());
        assert_eq!(redirect_targets(&store), vec![LOGIN_ROUTE]);
    }

    #[test]
    fn test_missing_user_id_redirects_once() {
        let store = MemoryStore::with(&[(TOKEN_KEY, "tok-1")]);
        assert_eq!(redirect_targets(&store), vec![LOGIN_ROUTE]);
    }

    #[test]
    fn test_empty_store_redirects_once() {
        let store = MemoryStore::with(&[]);
        assert_eq!(redirect_targets(&store), vec![LOGIN_ROUTE]);
    }

    #[test]
    fn test_unreadable_store_fails_closed() {
        // Storage disabled is indistinguishable from "not logged in".
        assert_eq!(redirect_targets(&BrokenStore), vec![LOGIN_ROUTE]);
    }

    #[test]
    fn test_unrelated_keys_ignored() {
        let store = MemoryStore::with(&[("theme", "dark"), (TOKEN_KEY, "tok-1")]);
        assert!(evaluate_session(&store).is_redirect());
    }
}
