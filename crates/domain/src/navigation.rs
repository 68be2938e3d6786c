//! Navigation, dashboard widget, and quick action entry types.

use serde::Serialize;

use crate::role::Permission;

/// Closed set of icon identifiers the portal shell can render.
///
/// The UI resolves these to glyphs; keeping the set closed means an unknown
/// identifier is a compile error here instead of a blank icon at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    /// Dashboard/home.
    Home,
    /// Activity feed.
    Activity,
    /// Calendar.
    Calendar,
    /// Calendar with day markers.
    CalendarDays,
    /// Generic document.
    FileText,
    /// Certificate/award.
    Award,
    /// Notification bell.
    Bell,
    /// View/inspect.
    Eye,
    /// People list.
    Users,
    /// Settings gear.
    Settings,
    /// Bar chart.
    BarChart3,
    /// Approval check.
    CheckCircle,
    /// Upload arrow.
    Upload,
    /// Add/plus.
    Plus,
    /// Single person.
    User,
    /// Graduation cap.
    GraduationCap,
}

impl Icon {
    /// Returns the stable identifier the portal shell maps to a glyph.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Activity => "Activity",
            Self::Calendar => "Calendar",
            Self::CalendarDays => "CalendarDays",
            Self::FileText => "FileText",
            Self::Award => "Award",
            Self::Bell => "Bell",
            Self::Eye => "Eye",
            Self::Users => "Users",
            Self::Settings => "Settings",
            Self::BarChart3 => "BarChart3",
            Self::CheckCircle => "CheckCircle",
            Self::Upload => "Upload",
            Self::Plus => "Plus",
            Self::User => "User",
            Self::GraduationCap => "GraduationCap",
        }
    }
}

/// One sidebar entry in a role configuration. Order within the config's
/// sidebar list is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarItem {
    /// Entry label.
    pub title: &'static str,
    /// Target route.
    pub route: &'static str,
    /// Entry icon.
    pub icon: Icon,
    /// Optional tooltip/description.
    pub description: Option<&'static str>,
    /// Permission required to show this entry, when stricter than the role
    /// itself.
    pub required_permission: Option<Permission>,
}

/// One header navigation entry, public or role-derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationItem {
    /// Entry label.
    pub name: &'static str,
    /// Target route or in-page anchor.
    pub href: &'static str,
    /// Whether the entry is only reachable when authenticated.
    pub requires_auth: bool,
    /// Permission required to show this entry.
    pub required_permission: Option<Permission>,
}

/// One capability-gated dashboard widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardWidget {
    /// Widget title.
    pub title: &'static str,
    /// Widget icon.
    pub icon: Icon,
    /// Route the widget links to.
    pub route: &'static str,
    /// Permission that gates the widget.
    pub required_permission: Permission,
}

/// One capability-gated quick action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    /// Action title.
    pub title: &'static str,
    /// Optional action description.
    pub description: Option<&'static str>,
    /// Action icon.
    pub icon: Icon,
    /// Stable action identifier dispatched by the UI.
    pub action: &'static str,
    /// Permission that gates the action.
    pub required_permission: Permission,
}

#[cfg(test)]
mod tests {
    use super::Icon;

    #[test]
    fn icon_identifiers_are_unique() {
        let icons = [
            Icon::Home,
            Icon::Activity,
            Icon::Calendar,
            Icon::CalendarDays,
            Icon::FileText,
            Icon::Award,
            Icon::Bell,
            Icon::Eye,
            Icon::Users,
            Icon::Settings,
            Icon::BarChart3,
            Icon::CheckCircle,
            Icon::Upload,
            Icon::Plus,
            Icon::User,
            Icon::GraduationCap,
        ];

        for (left_index, left) in icons.iter().enumerate() {
            for right in icons.iter().skip(left_index + 1) {
                assert_ne!(left.as_str(), right.as_str());
            }
        }
    }
}
