//! Roles, permissions, and the per-role configuration shape.

use std::str::FromStr;

use achievehub_core::AppError;
use serde::{Deserialize, Serialize};

use crate::navigation::{Icon, SidebarItem};

/// Portal roles. Closed set; a user's role is assigned by the upstream
/// backend at account creation and never changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Student portal access.
    Student,
    /// Faculty portal access.
    Faculty,
    /// System administrator access.
    Admin,
}

impl Role {
    /// Returns the stable wire value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "STUDENT",
            Self::Faculty => "FACULTY",
            Self::Admin => "ADMIN",
        }
    }

    /// Returns all known roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[Role::Student, Role::Faculty, Role::Admin];

        ALL
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "STUDENT" => Ok(Self::Student),
            "FACULTY" => Ok(Self::Faculty),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(AppError::Validation(format!("unknown role '{value}'"))),
        }
    }
}

/// Capabilities gated by role policy.
///
/// The wire values keep the upstream backend's `canXxx` flag names so that
/// permission tags survive the JSON contract unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Allows viewing the role dashboard.
    ViewDashboard,
    /// Allows uploading achievement certificates.
    UploadCertificates,
    /// Allows approving or rejecting uploaded certificates.
    ApproveCertificates,
    /// Allows viewing attendance records.
    ViewAttendance,
    /// Allows creating and editing events.
    ManageEvents,
    /// Allows viewing analytics and reports.
    ViewAnalytics,
    /// Allows managing student activities.
    ManageActivities,
    /// Allows listing every student.
    ViewAllStudents,
    /// Allows listing every faculty member.
    ViewAllFaculty,
    /// Allows changing system-wide settings.
    ManageSystem,
    /// Allows taking assessments.
    TakeAssessments,
    /// Allows authoring assessments.
    CreateAssessments,
    /// Allows grading submitted assessments.
    GradeAssessments,
}

impl Permission {
    /// Returns the stable wire value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewDashboard => "canViewDashboard",
            Self::UploadCertificates => "canUploadCertificates",
            Self::ApproveCertificates => "canApproveCertificates",
            Self::ViewAttendance => "canViewAttendance",
            Self::ManageEvents => "canManageEvents",
            Self::ViewAnalytics => "canViewAnalytics",
            Self::ManageActivities => "canManageActivities",
            Self::ViewAllStudents => "canViewAllStudents",
            Self::ViewAllFaculty => "canViewAllFaculty",
            Self::ManageSystem => "canManageSystem",
            Self::TakeAssessments => "canTakeAssessments",
            Self::CreateAssessments => "canCreateAssessments",
            Self::GradeAssessments => "canGradeAssessments",
        }
    }

    /// Returns all known permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::ViewDashboard,
            Permission::UploadCertificates,
            Permission::ApproveCertificates,
            Permission::ViewAttendance,
            Permission::ManageEvents,
            Permission::ViewAnalytics,
            Permission::ManageActivities,
            Permission::ViewAllStudents,
            Permission::ViewAllFaculty,
            Permission::ManageSystem,
            Permission::TakeAssessments,
            Permission::CreateAssessments,
            Permission::GradeAssessments,
        ];

        ALL
    }
}

impl Serialize for Permission {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::from_str(&value).map_err(serde::de::Error::custom)
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "canViewDashboard" => Ok(Self::ViewDashboard),
            "canUploadCertificates" => Ok(Self::UploadCertificates),
            "canApproveCertificates" => Ok(Self::ApproveCertificates),
            "canViewAttendance" => Ok(Self::ViewAttendance),
            "canManageEvents" => Ok(Self::ManageEvents),
            "canViewAnalytics" => Ok(Self::ViewAnalytics),
            "canManageActivities" => Ok(Self::ManageActivities),
            "canViewAllStudents" => Ok(Self::ViewAllStudents),
            "canViewAllFaculty" => Ok(Self::ViewAllFaculty),
            "canManageSystem" => Ok(Self::ManageSystem),
            "canTakeAssessments" => Ok(Self::TakeAssessments),
            "canCreateAssessments" => Ok(Self::CreateAssessments),
            "canGradeAssessments" => Ok(Self::GradeAssessments),
            _ => Err(AppError::Validation(format!(
                "unknown permission value '{value}'"
            ))),
        }
    }
}

/// Fixed-shape permission record.
///
/// Every role defines a value for every permission, so the shape is
/// structurally identical across roles by construction. Lookups go through
/// [`PermissionSet::is_granted`], which matches exhaustively over
/// [`Permission`]; there is no fallible string lookup anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSet {
    /// Dashboard visibility.
    pub can_view_dashboard: bool,
    /// Certificate upload.
    pub can_upload_certificates: bool,
    /// Certificate approval.
    pub can_approve_certificates: bool,
    /// Attendance visibility.
    pub can_view_attendance: bool,
    /// Event management.
    pub can_manage_events: bool,
    /// Analytics visibility.
    pub can_view_analytics: bool,
    /// Activity management.
    pub can_manage_activities: bool,
    /// Student roster visibility.
    pub can_view_all_students: bool,
    /// Faculty roster visibility.
    pub can_view_all_faculty: bool,
    /// System administration.
    pub can_manage_system: bool,
    /// Assessment taking.
    pub can_take_assessments: bool,
    /// Assessment authoring.
    pub can_create_assessments: bool,
    /// Assessment grading.
    pub can_grade_assessments: bool,
}

impl PermissionSet {
    /// Returns whether the given permission is granted by this set.
    #[must_use]
    pub const fn is_granted(&self, permission: Permission) -> bool {
        match permission {
            Permission::ViewDashboard => self.can_view_dashboard,
            Permission::UploadCertificates => self.can_upload_certificates,
            Permission::ApproveCertificates => self.can_approve_certificates,
            Permission::ViewAttendance => self.can_view_attendance,
            Permission::ManageEvents => self.can_manage_events,
            Permission::ViewAnalytics => self.can_view_analytics,
            Permission::ManageActivities => self.can_manage_activities,
            Permission::ViewAllStudents => self.can_view_all_students,
            Permission::ViewAllFaculty => self.can_view_all_faculty,
            Permission::ManageSystem => self.can_manage_system,
            Permission::TakeAssessments => self.can_take_assessments,
            Permission::CreateAssessments => self.can_create_assessments,
            Permission::GradeAssessments => self.can_grade_assessments,
        }
    }
}

/// Presentation color tag attached to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleColor {
    /// Primary theme accent.
    Primary,
    /// Secondary theme accent.
    Secondary,
    /// Destructive/administrative accent.
    Destructive,
}

impl RoleColor {
    /// Returns the stable wire value for this color tag.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
        }
    }
}

/// Hand-authored, immutable configuration for one role.
///
/// There is exactly one config per role; the catalog matches exhaustively
/// over [`Role`], so adding a role without a config is a compile error.
/// Sidebar order is display order and must be preserved by consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleConfig {
    /// The role this config belongs to.
    pub role: Role,
    /// Human-readable role label, e.g. `Student`.
    pub display_name: &'static str,
    /// Short description of the access level.
    pub description: &'static str,
    /// Presentation color tag.
    pub color: RoleColor,
    /// Role icon.
    pub icon: Icon,
    /// Permission booleans for this role.
    pub permissions: PermissionSet,
    /// Landing route after login.
    pub default_route: &'static str,
    /// Ordered sidebar entries.
    pub sidebar_items: &'static [SidebarItem],
}
