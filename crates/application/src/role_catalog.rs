//! Static per-role configuration table.

use achievehub_domain::{
    Icon, Permission, PermissionSet, Role, RoleColor, RoleConfig, SidebarItem,
};

const STUDENT_PERMISSIONS: PermissionSet = PermissionSet {
    can_view_dashboard: true,
    can_upload_certificates: true,
    can_approve_certificates: false,
    can_view_attendance: true,
    can_manage_events: false,
    can_view_analytics: true,
    can_manage_activities: false,
    can_view_all_students: false,
    can_view_all_faculty: false,
    can_manage_system: false,
    can_take_assessments: true,
    can_create_assessments: false,
    can_grade_assessments: false,
};

const STUDENT_SIDEBAR: &[SidebarItem] = &[
    SidebarItem {
        title: "Dashboard",
        route: "/student/dashboard",
        icon: Icon::Home,
        description: Some("Your personal dashboard"),
        required_permission: None,
    },
    SidebarItem {
        title: "My Activities",
        route: "/student/activities",
        icon: Icon::Activity,
        description: Some("Track your activities"),
        required_permission: None,
    },
    SidebarItem {
        title: "Show Attendance",
        route: "/attendance",
        icon: Icon::Calendar,
        description: Some("View your attendance"),
        required_permission: None,
    },
    SidebarItem {
        title: "Assessments",
        route: "/assessments",
        icon: Icon::FileText,
        description: Some("Take quizzes and tests"),
        required_permission: None,
    },
    SidebarItem {
        title: "Certificate Management",
        route: "/certificates",
        icon: Icon::Award,
        description: Some("Upload and track certificates"),
        required_permission: None,
    },
    SidebarItem {
        title: "Event Alerts",
        route: "/student/profile",
        icon: Icon::Bell,
        description: Some("View event notifications"),
        required_permission: None,
    },
    SidebarItem {
        title: "Reports",
        route: "/analytics",
        icon: Icon::FileText,
        description: Some("View your reports"),
        required_permission: None,
    },
    SidebarItem {
        title: "Profile",
        route: "/student/profile",
        icon: Icon::Eye,
        description: Some("Manage your profile"),
        required_permission: None,
    },
];

const STUDENT_CONFIG: RoleConfig = RoleConfig {
    role: Role::Student,
    display_name: "Student",
    description: "Student Portal Access",
    color: RoleColor::Primary,
    icon: Icon::User,
    permissions: STUDENT_PERMISSIONS,
    default_route: "/student/dashboard",
    sidebar_items: STUDENT_SIDEBAR,
};

const FACULTY_PERMISSIONS: PermissionSet = PermissionSet {
    can_view_dashboard: true,
    can_upload_certificates: false,
    can_approve_certificates: true,
    can_view_attendance: true,
    can_manage_events: true,
    can_view_analytics: true,
    can_manage_activities: true,
    can_view_all_students: true,
    can_view_all_faculty: false,
    can_manage_system: false,
    can_take_assessments: false,
    can_create_assessments: true,
    can_grade_assessments: true,
};

const FACULTY_SIDEBAR: &[SidebarItem] = &[
    SidebarItem {
        title: "Dashboard",
        route: "/faculty/dashboard",
        icon: Icon::Home,
        description: Some("Faculty dashboard"),
        required_permission: None,
    },
    SidebarItem {
        title: "Assessment Management",
        route: "/assessments",
        icon: Icon::FileText,
        description: Some("Create and manage assessments"),
        required_permission: None,
    },
    SidebarItem {
        title: "Attendance Monitoring",
        route: "/attendance",
        icon: Icon::Calendar,
        description: Some("Monitor student attendance"),
        required_permission: None,
    },
    SidebarItem {
        title: "Certificate Approval",
        route: "/certificates",
        icon: Icon::Award,
        description: Some("Review and approve certificates"),
        required_permission: None,
    },
    SidebarItem {
        title: "Report Generation",
        route: "/analytics",
        icon: Icon::BarChart3,
        description: Some("Generate reports"),
        required_permission: None,
    },
    SidebarItem {
        title: "Event Management",
        route: "/faculty/events",
        icon: Icon::CalendarDays,
        description: Some("Manage events"),
        required_permission: None,
    },
    SidebarItem {
        title: "All Activities",
        route: "/admin/activities",
        icon: Icon::Activity,
        description: Some("View all activities"),
        required_permission: None,
    },
    SidebarItem {
        title: "Profile",
        route: "/faculty/profile",
        icon: Icon::Eye,
        description: Some("Manage your profile"),
        required_permission: None,
    },
];

const FACULTY_CONFIG: RoleConfig = RoleConfig {
    role: Role::Faculty,
    display_name: "Faculty",
    description: "Faculty Portal Access",
    color: RoleColor::Secondary,
    icon: Icon::GraduationCap,
    permissions: FACULTY_PERMISSIONS,
    default_route: "/faculty/dashboard",
    sidebar_items: FACULTY_SIDEBAR,
};

const ADMIN_PERMISSIONS: PermissionSet = PermissionSet {
    can_view_dashboard: true,
    can_upload_certificates: false,
    can_approve_certificates: true,
    can_view_attendance: true,
    can_manage_events: true,
    can_view_analytics: true,
    can_manage_activities: true,
    can_view_all_students: true,
    can_view_all_faculty: true,
    can_manage_system: true,
    can_take_assessments: false,
    can_create_assessments: true,
    can_grade_assessments: true,
};

const ADMIN_SIDEBAR: &[SidebarItem] = &[
    SidebarItem {
        title: "Admin Dashboard",
        route: "/admin/dashboard",
        icon: Icon::Home,
        description: Some("System overview"),
        required_permission: None,
    },
    SidebarItem {
        title: "User Management",
        route: "/admin/users",
        icon: Icon::Users,
        description: Some("Manage users"),
        required_permission: None,
    },
    SidebarItem {
        title: "System Settings",
        route: "/admin/settings",
        icon: Icon::Settings,
        description: Some("System configuration"),
        required_permission: None,
    },
    SidebarItem {
        title: "All Activities",
        route: "/admin/activities",
        icon: Icon::Activity,
        description: Some("Manage all activities"),
        required_permission: None,
    },
    SidebarItem {
        title: "Certificate Management",
        route: "/certificates",
        icon: Icon::Award,
        description: Some("Manage certificates"),
        required_permission: None,
    },
    SidebarItem {
        title: "Attendance Reports",
        route: "/attendance",
        icon: Icon::Calendar,
        description: Some("Attendance analytics"),
        required_permission: None,
    },
    SidebarItem {
        title: "Event Management",
        route: "/faculty/events",
        icon: Icon::CalendarDays,
        description: Some("Manage events"),
        required_permission: None,
    },
    SidebarItem {
        title: "Analytics",
        route: "/analytics",
        icon: Icon::BarChart3,
        description: Some("System analytics"),
        required_permission: None,
    },
];

const ADMIN_CONFIG: RoleConfig = RoleConfig {
    role: Role::Admin,
    display_name: "Administrator",
    description: "System Administrator Access",
    color: RoleColor::Destructive,
    icon: Icon::Settings,
    permissions: ADMIN_PERMISSIONS,
    default_route: "/admin/dashboard",
    sidebar_items: ADMIN_SIDEBAR,
};

/// Lookup into the hand-authored role configuration table.
///
/// The table is authored at compile time and never mutated; the exhaustive
/// match guarantees every role has exactly one config.
pub struct RoleCatalog;

impl RoleCatalog {
    /// Returns the configuration for a role.
    #[must_use]
    pub const fn config(role: Role) -> &'static RoleConfig {
        match role {
            Role::Student => &STUDENT_CONFIG,
            Role::Faculty => &FACULTY_CONFIG,
            Role::Admin => &ADMIN_CONFIG,
        }
    }

    /// Returns all role configurations in role-declaration order.
    #[must_use]
    pub fn all() -> [&'static RoleConfig; 3] {
        [&STUDENT_CONFIG, &FACULTY_CONFIG, &ADMIN_CONFIG]
    }
}

#[cfg(test)]
mod tests {
    use achievehub_domain::{Permission, Role};

    use super::RoleCatalog;

    #[test]
    fn every_role_has_a_config() {
        for role in Role::all() {
            let config = RoleCatalog::config(*role);
            assert_eq!(config.role, *role);
            assert!(!config.sidebar_items.is_empty());
        }
    }

    #[test]
    fn default_routes_match_role_dashboards() {
        assert_eq!(
            RoleCatalog::config(Role::Student).default_route,
            "/student/dashboard"
        );
        assert_eq!(
            RoleCatalog::config(Role::Faculty).default_route,
            "/faculty/dashboard"
        );
        assert_eq!(
            RoleCatalog::config(Role::Admin).default_route,
            "/admin/dashboard"
        );
    }

    #[test]
    fn sidebar_routes_are_absolute_paths() {
        for config in RoleCatalog::all() {
            for item in config.sidebar_items {
                assert!(
                    item.route.starts_with('/'),
                    "{} has non-absolute route {}",
                    item.title,
                    item.route
                );
            }
        }
    }

    #[test]
    fn only_students_upload_and_take_assessments() {
        for config in RoleCatalog::all() {
            let is_student = config.role == Role::Student;
            assert_eq!(
                config.permissions.is_granted(Permission::UploadCertificates),
                is_student
            );
            assert_eq!(
                config.permissions.is_granted(Permission::TakeAssessments),
                is_student
            );
        }
    }

    #[test]
    fn only_admins_manage_the_system() {
        for config in RoleCatalog::all() {
            assert_eq!(
                config.permissions.is_granted(Permission::ManageSystem),
                config.role == Role::Admin
            );
            assert_eq!(
                config.permissions.is_granted(Permission::ViewAllFaculty),
                config.role == Role::Admin
            );
        }
    }
}
