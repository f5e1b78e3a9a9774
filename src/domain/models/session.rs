use serde::{Deserialize, Serialize};

/// Storage key for the access token, written by the login flow.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the user identifier, written by the login flow.
pub const USER_ID_KEY: &str = "userId";
/// Where unauthenticated visitors are sent.
pub const LOGIN_ROUTE: &str = "/login";

/// Proof of an active login: an opaque token plus the user id it belongs to.
/// Externally owned - created at login, destroyed at logout. This crate only
/// ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMarker {
    pub token: String,
    pub user_id: String,
}

impl SessionMarker {
    /// A marker is valid only when both halves are present. Either half
    /// missing means "not authenticated" - not an error.
    pub fn from_parts(token: Option<String>, user_id: Option<String>) -> Option<SessionMarker> {
        match (token, user_id) {
            (Some(token), Some(user_id)) => Some(SessionMarker { token, user_id }),
            _ => None,
        }
    }
}

/// Outcome of the mount-time auth gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Valid session found; render the shell.
    Continue(SessionMarker),
    /// No valid session; issue one client-side navigation to the target and
    /// nothing else. Advisory only - server-side authorization still applies.
    Redirect(&'static str),
}

impl GateDecision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, GateDecision::Redirect(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_requires_both_halves() {
        assert!(SessionMarker::from_parts(Some("tok".into()), None).is_none());
        assert!(SessionMarker::from_parts(None, Some("u1".into())).is_none());
        assert!(SessionMarker::from_parts(None, None).is_none());

        let marker = SessionMarker::from_parts(Some("tok".into()), Some("u1".into())).unwrap();
        assert_eq!(marker.token, "tok");
        assert_eq!(marker.user_id, "u1");
    }

    #[test]
    fn test_empty_string_is_still_present() {
        // Presence is the contract; the gate does not judge token contents.
        assert!(SessionMarker::from_parts(Some(String::new()), Some("u1".into())).is_some());
    }
}
