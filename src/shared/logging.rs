//! Structured logging for the dashboard shell.
//!
//! Provides consistent, contextual logging across the application.
//! Uses structured tracing fields keyed by operation.

/// Log categories for shell operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    SessionGate,
    LayoutToggle,
    Navigation,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::SessionGate => "session_gate",
            LogOperation::LayoutToggle => "layout_toggle",
            LogOperation::Navigation => "navigation",
        }
    }
}

/// Log a passed auth gate (valid session marker found)
pub fn log_gate_pass(user_id: &str) {
    tracing::debug!(
        operation = LogOperation::SessionGate.as_str(),
        user_id = user_id,
        "Session marker present, rendering shell"
    );
}

/// Log an auth-gate redirect (marker absent or store unavailable)
pub fn log_gate_redirect(target: &str) {
    tracing::info!(
        operation = LogOperation::SessionGate.as_str(),
        target = target,
        "No valid session, redirecting"
    );
}

/// Log a session-store access failure (treated as unauthenticated)
pub fn log_store_unavailable(error: &str) {
    tracing::warn!(
        operation = LogOperation::SessionGate.as_str(),
        error = error,
        "Session store unavailable, failing closed"
    );
}

/// Log a layout flag transition
pub fn log_layout_change(flag: &str, value: &str) {
    tracing::debug!(
        operation = LogOperation::LayoutToggle.as_str(),
        flag = flag,
        value = value,
        "Layout state changed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_labels_are_stable() {
        // Dashboards filter on these strings; renaming them breaks queries.
        assert_eq!(LogOperation::SessionGate.as_str(), "session_gate");
        assert_eq!(LogOperation::LayoutToggle.as_str(), "layout_toggle");
        assert_eq!(LogOperation::Navigation.as_str(), "navigation");
    }
}
