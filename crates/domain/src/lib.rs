//! Domain entities and invariants for the achievement portal.

#![forbid(unsafe_code)]

mod navigation;
mod role;
mod user;

pub use navigation::{DashboardWidget, Icon, NavigationItem, QuickAction, SidebarItem};
pub use role::{Permission, PermissionSet, Role, RoleColor, RoleConfig};
pub use user::{
    AuthenticatedUser, FacultyProfile, ScholarType, StudentProfile, UserId, UserProfile,
};
