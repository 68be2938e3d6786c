//! Pure projections from an optional authenticated user to permissions,
//! routes, navigation, widgets, and quick actions.
//!
//! Every function here is total over `Option<&AuthenticatedUser>`: an absent
//! user always yields the anonymous output, never an error. Unknown roles
//! cannot reach this module because role parsing fails closed at the wire
//! boundary.

use achievehub_domain::{
    AuthenticatedUser, DashboardWidget, Icon, NavigationItem, Permission, QuickAction, RoleConfig,
    ScholarType, SidebarItem, UserProfile,
};
use chrono::NaiveDate;

use crate::role_catalog::RoleCatalog;

/// Route shown to anonymous visitors.
pub const ANONYMOUS_ROUTE: &str = "/";

const PUBLIC_NAVIGATION: &[NavigationItem] = &[
    NavigationItem {
        name: "Home",
        href: "/",
        requires_auth: false,
        required_permission: None,
    },
    NavigationItem {
        name: "About",
        href: "#about",
        requires_auth: false,
        required_permission: None,
    },
    NavigationItem {
        name: "Services",
        href: "#services",
        requires_auth: false,
        required_permission: None,
    },
];

const ANONYMOUS_NAVIGATION_TAIL: &[NavigationItem] = &[
    NavigationItem {
        name: "Login",
        href: "/login",
        requires_auth: false,
        required_permission: None,
    },
    NavigationItem {
        name: "Register",
        href: "/register",
        requires_auth: false,
        required_permission: None,
    },
];

const HELP_NAVIGATION: NavigationItem = NavigationItem {
    name: "Help",
    href: "#help",
    requires_auth: false,
    required_permission: None,
};

/// Where a widget catalog entry points.
#[derive(Debug, Clone, Copy)]
enum WidgetTarget {
    /// The viewing user's default landing route.
    RoleDefault,
    /// A fixed route.
    Fixed(&'static str),
}

struct WidgetSpec {
    title: &'static str,
    icon: Icon,
    target: WidgetTarget,
    required_permission: Permission,
}

const WIDGET_CATALOG: &[WidgetSpec] = &[
    WidgetSpec {
        title: "Dashboard Overview",
        icon: Icon::Home,
        target: WidgetTarget::RoleDefault,
        required_permission: Permission::ViewDashboard,
    },
    WidgetSpec {
        title: "Upload Certificates",
        icon: Icon::Award,
        target: WidgetTarget::Fixed("/certificates"),
        required_permission: Permission::UploadCertificates,
    },
    WidgetSpec {
        title: "Certificate Approval",
        icon: Icon::CheckCircle,
        target: WidgetTarget::Fixed("/certificates"),
        required_permission: Permission::ApproveCertificates,
    },
    WidgetSpec {
        title: "Attendance",
        icon: Icon::Calendar,
        target: WidgetTarget::Fixed("/attendance"),
        required_permission: Permission::ViewAttendance,
    },
    WidgetSpec {
        title: "Event Management",
        icon: Icon::CalendarDays,
        target: WidgetTarget::Fixed("/faculty/events"),
        required_permission: Permission::ManageEvents,
    },
    WidgetSpec {
        title: "Analytics",
        icon: Icon::BarChart3,
        target: WidgetTarget::Fixed("/analytics"),
        required_permission: Permission::ViewAnalytics,
    },
];

const QUICK_ACTION_CATALOG: &[QuickAction] = &[
    QuickAction {
        title: "Upload Certificate",
        description: None,
        icon: Icon::Upload,
        action: "upload-certificate",
        required_permission: Permission::UploadCertificates,
    },
    QuickAction {
        title: "Review Certificates",
        description: None,
        icon: Icon::Eye,
        action: "review-certificates",
        required_permission: Permission::ApproveCertificates,
    },
    QuickAction {
        title: "Create Event",
        description: Some("Create a new event"),
        icon: Icon::Plus,
        action: "create-event",
        required_permission: Permission::ManageEvents,
    },
    QuickAction {
        title: "Add Activity",
        description: Some("Add a new activity"),
        icon: Icon::Activity,
        action: "add-activity",
        required_permission: Permission::ManageActivities,
    },
];

/// Returns the role configuration for the user, or `None` for anonymous
/// visitors.
#[must_use]
pub fn role_config(user: Option<&AuthenticatedUser>) -> Option<&'static RoleConfig> {
    user.map(|user| RoleCatalog::config(user.role()))
}

/// Returns whether the user holds the permission. Anonymous visitors hold
/// no permissions (fail-closed).
#[must_use]
pub fn has_permission(user: Option<&AuthenticatedUser>, permission: Permission) -> bool {
    role_config(user).is_some_and(|config| config.permissions.is_granted(permission))
}

/// Returns the user's landing route, or `/` for anonymous visitors.
#[must_use]
pub fn default_route(user: Option<&AuthenticatedUser>) -> &'static str {
    role_config(user).map_or(ANONYMOUS_ROUTE, |config| config.default_route)
}

/// Returns the role's sidebar entries verbatim, preserving configured order.
/// Empty for anonymous visitors.
#[must_use]
pub fn sidebar_items(user: Option<&AuthenticatedUser>) -> &'static [SidebarItem] {
    role_config(user).map_or(&[], |config| config.sidebar_items)
}

/// Returns whether the user can reach a route, defined as membership in the
/// role's sidebar entries.
#[must_use]
pub fn can_access_route(user: Option<&AuthenticatedUser>, route: &str) -> bool {
    sidebar_items(user).iter().any(|item| item.route == route)
}

/// Returns the user's display name composed with the role label, e.g.
/// `Asha (Student)`. Falls back to the username when the profile is absent;
/// `Guest` for anonymous visitors.
#[must_use]
pub fn display_name(user: Option<&AuthenticatedUser>) -> String {
    match user {
        Some(user) => {
            let config = RoleCatalog::config(user.role());
            format!("{} ({})", user.preferred_name(), config.display_name)
        }
        None => "Guest".to_owned(),
    }
}

/// Role-specific profile extras surfaced next to the common fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileDetails {
    /// No extras (anonymous visitor, or account without a profile).
    None,
    /// Student extras.
    Student {
        /// Roll number.
        roll_number: String,
        /// Enrolled degree.
        degree: String,
        /// Residence category.
        scholar_type: ScholarType,
        /// Date of birth.
        date_of_birth: NaiveDate,
    },
    /// Faculty extras.
    Faculty {
        /// Department.
        department: String,
    },
}

/// Flattened profile summary for headers and profile cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileInfo {
    /// Display name (profile name, username fallback, or `Guest`).
    pub name: String,
    /// Contact email (empty for anonymous visitors).
    pub email: String,
    /// Role label (`GUEST` for anonymous visitors).
    pub role_label: String,
    /// Role-specific extras.
    pub details: ProfileDetails,
}

/// Returns the profile summary for the user, or the guest placeholder.
#[must_use]
pub fn profile_info(user: Option<&AuthenticatedUser>) -> ProfileInfo {
    let Some(user) = user else {
        return ProfileInfo {
            name: "Guest".to_owned(),
            email: String::new(),
            role_label: "GUEST".to_owned(),
            details: ProfileDetails::None,
        };
    };

    let config = RoleCatalog::config(user.role());
    let details = match user.profile() {
        Some(UserProfile::Student(profile)) => ProfileDetails::Student {
            roll_number: profile.roll_number().to_owned(),
            degree: profile.degree().to_owned(),
            scholar_type: profile.scholar_type(),
            date_of_birth: profile.dob(),
        },
        Some(UserProfile::Faculty(profile)) => ProfileDetails::Faculty {
            department: profile.department().to_owned(),
        },
        None => ProfileDetails::None,
    };

    ProfileInfo {
        name: user.preferred_name().to_owned(),
        email: user
            .profile()
            .map_or(user.email(), UserProfile::email)
            .to_owned(),
        role_label: config.display_name.to_owned(),
        details,
    }
}

/// Returns header navigation entries.
///
/// Anonymous visitors get the fixed public set plus login/register. An
/// authenticated user gets the public set, the role sidebar reshaped as nav
/// entries flagged `requires_auth`, and a trailing public help entry.
#[must_use]
pub fn navigation_items(user: Option<&AuthenticatedUser>) -> Vec<NavigationItem> {
    let mut items = PUBLIC_NAVIGATION.to_vec();

    match user {
        None => items.extend_from_slice(ANONYMOUS_NAVIGATION_TAIL),
        Some(user) => {
            items.extend(sidebar_items(Some(user)).iter().map(|item| NavigationItem {
                name: item.title,
                href: item.route,
                requires_auth: true,
                required_permission: item.required_permission,
            }));
            items.push(HELP_NAVIGATION);
        }
    }

    items
}

/// Returns the dashboard widgets whose gating permission holds for the user.
/// Empty for anonymous visitors.
#[must_use]
pub fn dashboard_widgets(user: Option<&AuthenticatedUser>) -> Vec<DashboardWidget> {
    let Some(user) = user else {
        return Vec::new();
    };

    WIDGET_CATALOG
        .iter()
        .filter(|spec| has_permission(Some(user), spec.required_permission))
        .map(|spec| DashboardWidget {
            title: spec.title,
            icon: spec.icon,
            route: match spec.target {
                WidgetTarget::RoleDefault => default_route(Some(user)),
                WidgetTarget::Fixed(route) => route,
            },
            required_permission: spec.required_permission,
        })
        .collect()
}

/// Returns the quick actions whose gating permission holds for the user.
/// Empty for anonymous visitors.
#[must_use]
pub fn quick_actions(user: Option<&AuthenticatedUser>) -> Vec<QuickAction> {
    if user.is_none() {
        return Vec::new();
    }

    QUICK_ACTION_CATALOG
        .iter()
        .filter(|action| has_permission(user, action.required_permission))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use achievehub_domain::{
        AuthenticatedUser, FacultyProfile, Permission, Role, ScholarType, StudentProfile, UserId,
        UserProfile,
    };
    use chrono::NaiveDate;

    use super::*;

    fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2004, 6, 14).unwrap_or_default()
    }

    fn student_user() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new(7),
            "asha",
            "asha@example.edu",
            "9876543210",
            Role::Student,
            Some(UserProfile::Student(StudentProfile::new(
                12,
                "Asha",
                "asha@example.edu",
                "9876543210",
                "B.Tech CSE",
                birth_date(),
                "21CS118",
                ScholarType::Hosteller,
            ))),
        )
    }

    fn faculty_user() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new(3),
            "drrao",
            "rao@example.edu",
            "9123456780",
            Role::Faculty,
            Some(UserProfile::Faculty(FacultyProfile::new(
                5,
                "Dr. Rao",
                "rao@example.edu",
                "9123456780",
                "Computer Science",
            ))),
        )
    }

    fn admin_user_without_profile() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new(1),
            "admin1",
            "admin@example.edu",
            "9000000000",
            Role::Admin,
            None,
        )
    }

    #[test]
    fn anonymous_holds_no_permissions() {
        for permission in Permission::all() {
            assert!(!has_permission(None, *permission));
        }
    }

    #[test]
    fn permissions_match_config_literals() {
        let user = student_user();
        let config = RoleCatalog::config(Role::Student);
        for permission in Permission::all() {
            assert_eq!(
                has_permission(Some(&user), *permission),
                config.permissions.is_granted(*permission)
            );
        }
    }

    #[test]
    fn default_route_falls_back_to_root() {
        assert_eq!(default_route(None), "/");
        assert_eq!(default_route(Some(&student_user())), "/student/dashboard");
        assert_eq!(default_route(Some(&faculty_user())), "/faculty/dashboard");
    }

    #[test]
    fn sidebar_items_preserve_config_order() {
        let user = faculty_user();
        let items = sidebar_items(Some(&user));
        let config = RoleCatalog::config(Role::Faculty);
        assert_eq!(items, config.sidebar_items);
        assert!(sidebar_items(None).is_empty());
    }

    #[test]
    fn display_name_composes_profile_and_role() {
        assert_eq!(display_name(Some(&student_user())), "Asha (Student)");
        assert_eq!(display_name(Some(&faculty_user())), "Dr. Rao (Faculty)");
        assert_eq!(display_name(None), "Guest");
    }

    #[test]
    fn display_name_falls_back_to_username() {
        assert_eq!(
            display_name(Some(&admin_user_without_profile())),
            "admin1 (Administrator)"
        );
    }

    #[test]
    fn profile_info_carries_student_details() {
        let info = profile_info(Some(&student_user()));
        assert_eq!(info.name, "Asha");
        assert_eq!(info.role_label, "Student");
        assert_eq!(
            info.details,
            ProfileDetails::Student {
                roll_number: "21CS118".to_owned(),
                degree: "B.Tech CSE".to_owned(),
                scholar_type: ScholarType::Hosteller,
                date_of_birth: birth_date(),
            }
        );
    }

    #[test]
    fn profile_info_for_guest_is_placeholder() {
        let info = profile_info(None);
        assert_eq!(info.name, "Guest");
        assert_eq!(info.email, "");
        assert_eq!(info.role_label, "GUEST");
        assert_eq!(info.details, ProfileDetails::None);
    }

    #[test]
    fn anonymous_navigation_offers_login_and_register() {
        let items = navigation_items(None);
        let names: Vec<&str> = items.iter().map(|item| item.name).collect();
        assert_eq!(names, ["Home", "About", "Services", "Login", "Register"]);
        assert!(items.iter().all(|item| !item.requires_auth));
    }

    #[test]
    fn student_navigation_contains_auth_flagged_dashboard() {
        let user = student_user();
        let items = navigation_items(Some(&user));

        assert!(items.iter().any(|item| {
            item.name == "Dashboard" && item.href == "/student/dashboard" && item.requires_auth
        }));
        // Public base entries stay first, help entry stays last.
        assert_eq!(items[0].name, "Home");
        assert_eq!(items.last().map(|item| item.name), Some("Help"));
        assert!(!items.iter().any(|item| item.name == "Login"));
    }

    #[test]
    fn widgets_are_gated_by_permissions() {
        let student = student_user();
        let widgets = dashboard_widgets(Some(&student));
        assert!(
            widgets
                .iter()
                .all(|widget| has_permission(Some(&student), widget.required_permission))
        );
        assert!(
            widgets
                .iter()
                .any(|widget| widget.title == "Upload Certificates")
        );
        assert!(
            !widgets
                .iter()
                .any(|widget| widget.title == "Certificate Approval")
        );
    }

    #[test]
    fn overview_widget_links_to_role_dashboard() {
        let faculty = faculty_user();
        let widgets = dashboard_widgets(Some(&faculty));
        let overview = widgets
            .iter()
            .find(|widget| widget.title == "Dashboard Overview");
        assert_eq!(overview.map(|widget| widget.route), Some("/faculty/dashboard"));
    }

    #[test]
    fn quick_actions_are_gated_by_permissions() {
        let faculty = faculty_user();
        let actions = quick_actions(Some(&faculty));
        let titles: Vec<&str> = actions.iter().map(|action| action.title).collect();
        assert_eq!(
            titles,
            ["Review Certificates", "Create Event", "Add Activity"]
        );

        assert!(quick_actions(None).is_empty());
        assert!(dashboard_widgets(None).is_empty());
    }

    #[test]
    fn route_access_is_sidebar_membership() {
        let student = student_user();
        assert!(can_access_route(Some(&student), "/student/dashboard"));
        assert!(can_access_route(Some(&student), "/certificates"));
        assert!(!can_access_route(Some(&student), "/admin/users"));
        assert!(!can_access_route(None, "/"));
    }

    #[test]
    fn resolver_is_idempotent_for_same_user() {
        let user = student_user();
        assert_eq!(
            navigation_items(Some(&user)),
            navigation_items(Some(&user))
        );
        assert_eq!(
            dashboard_widgets(Some(&user)),
            dashboard_widgets(Some(&user))
        );
        assert_eq!(quick_actions(Some(&user)), quick_actions(Some(&user)));
        assert_eq!(profile_info(Some(&user)), profile_info(Some(&user)));
    }
}
