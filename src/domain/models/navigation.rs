use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Named icon reference. Rendering (glyph, artwork) is the view layer's
/// concern; the model only says which capability an entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavIcon {
    Home,
    Assistant,
    Tasks,
    Calendar,
    Analytics,
    Team,
    Settings,
    Notifications,
    BackArrow,
    Logout,
}

/// Capability state of a navigation entry. Explicit per entry, never derived,
/// so entries can move between states without touching the rendering code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryStatus {
    /// A real link to `path`.
    Active,
    /// Rendered with identical visual weight but non-interactive, with a
    /// "Coming Soon" badge while the sidebar is expanded.
    ComingSoon,
}

/// One sidebar entry. Immutable, defined at build time; ordering within its
/// group is the rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
    pub status: EntryStatus,
}

impl NavEntry {
    pub fn is_active(&self) -> bool {
        self.status == EntryStatus::Active
    }
}

/// Primary navigation group, rendered top-to-bottom.
pub static PRIMARY_ENTRIES: Lazy<Vec<NavEntry>> = Lazy::new(|| {
    vec![
        NavEntry {
            path: "/dashboard",
            label: "Home",
            icon: NavIcon::Home,
            status: EntryStatus::Active,
        },
        NavEntry {
            path: "/dashboard/ai",
            label: "AI Assistant",
            icon: NavIcon::Assistant,
            status: EntryStatus::Active,
        },
        NavEntry {
            path: "/dashboard/tasks",
            label: "Tasks",
            icon: NavIcon::Tasks,
            status: EntryStatus::Active,
        },
        NavEntry {
            path: "/dashboard/calendar",
            label: "Calendar",
            icon: NavIcon::Calendar,
            status: EntryStatus::ComingSoon,
        },
        NavEntry {
            path: "/dashboard/analytics",
            label: "Analytics",
            icon: NavIcon::Analytics,
            status: EntryStatus::ComingSoon,
        },
        NavEntry {
            path: "/dashboard/team",
            label: "Team",
            icon: NavIcon::Team,
            status: EntryStatus::ComingSoon,
        },
    ]
});

/// "Settings" group, rendered below the primary group. Always present,
/// regardless of layout state.
pub static SETTINGS_ENTRIES: Lazy<Vec<NavEntry>> = Lazy::new(|| {
    vec![
        NavEntry {
            path: "/dashboard/settings",
            label: "Settings",
            icon: NavIcon::Settings,
            status: EntryStatus::ComingSoon,
        },
        NavEntry {
            path: "/dashboard/notifications",
            label: "Notifications",
            icon: NavIcon::Notifications,
            status: EntryStatus::ComingSoon,
        },
    ]
});

/// All entries in rendering order (primary group, then settings group).
pub fn all_entries() -> impl Iterator<Item = &'static NavEntry> {
    PRIMARY_ENTRIES.iter().chain(SETTINGS_ENTRIES.iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_three_active_entries() {
        let active: Vec<_> = all_entries().filter(|e| e.is_active()).collect();
        assert_eq!(active.len(), 3);
        let paths: Vec<_> = active.iter().map(|e| e.path).collect();
        assert_eq!(paths, ["/dashboard", "/dashboard/ai", "/dashboard/tasks"]);
    }

    #[test]
    fn test_exactly_five_coming_soon_entries() {
        let placeholders: Vec<_> = all_entries()
            .filter(|e| e.status == EntryStatus::ComingSoon)
            .map(|e| e.label)
            .collect();
        assert_eq!(
            placeholders,
            ["Calendar", "Analytics", "Team", "Settings", "Notifications"]
        );
    }

    #[test]
    fn test_group_ordering() {
        // Active entries lead the primary group; the settings group holds
        // only placeholders.
        assert!(PRIMARY_ENTRIES[..3].iter().all(|e| e.is_active()));
        assert!(PRIMARY_ENTRIES[3..].iter().all(|e| !e.is_active()));
        assert!(SETTINGS_ENTRIES.iter().all(|e| !e.is_active()));
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = all_entries().map(|e| e.path).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), PRIMARY_ENTRIES.len() + SETTINGS_ENTRIES.len());
    }
}
