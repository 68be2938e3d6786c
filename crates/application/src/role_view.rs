//! Precomputed role view snapshot and its memoizing binding.

use std::sync::{Arc, Mutex, PoisonError};

use achievehub_domain::{
    AuthenticatedUser, DashboardWidget, NavigationItem, Permission, PermissionSet, QuickAction,
    Role, SidebarItem,
};

use crate::role_resolver::{self, ProfileInfo};

/// Flat snapshot of every resolver output for one user.
///
/// View components read from this instead of calling the resolver functions
/// individually, so one snapshot is computed per distinct user.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleView {
    role: Option<Role>,
    permissions: Option<&'static PermissionSet>,
    display_name: String,
    default_route: &'static str,
    sidebar_items: &'static [SidebarItem],
    navigation_items: Vec<NavigationItem>,
    dashboard_widgets: Vec<DashboardWidget>,
    quick_actions: Vec<QuickAction>,
    profile_info: ProfileInfo,
}

impl RoleView {
    /// Computes the snapshot for a user (or the anonymous snapshot).
    #[must_use]
    pub fn for_user(user: Option<&AuthenticatedUser>) -> Self {
        Self {
            role: user.map(AuthenticatedUser::role),
            permissions: role_resolver::role_config(user).map(|config| &config.permissions),
            display_name: role_resolver::display_name(user),
            default_route: role_resolver::default_route(user),
            sidebar_items: role_resolver::sidebar_items(user),
            navigation_items: role_resolver::navigation_items(user),
            dashboard_widgets: role_resolver::dashboard_widgets(user),
            quick_actions: role_resolver::quick_actions(user),
            profile_info: role_resolver::profile_info(user),
        }
    }

    /// Returns the user's role, if authenticated.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Returns the role's permission set, if authenticated.
    #[must_use]
    pub fn permissions(&self) -> Option<&'static PermissionSet> {
        self.permissions
    }

    /// Returns whether the viewed user holds the permission (fail-closed).
    #[must_use]
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions
            .is_some_and(|permissions| permissions.is_granted(permission))
    }

    /// Returns the composed display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Returns the landing route.
    #[must_use]
    pub fn default_route(&self) -> &'static str {
        self.default_route
    }

    /// Returns the sidebar entries in display order.
    #[must_use]
    pub fn sidebar_items(&self) -> &'static [SidebarItem] {
        self.sidebar_items
    }

    /// Returns the header navigation entries.
    #[must_use]
    pub fn navigation_items(&self) -> &[NavigationItem] {
        self.navigation_items.as_slice()
    }

    /// Returns the capability-gated dashboard widgets.
    #[must_use]
    pub fn dashboard_widgets(&self) -> &[DashboardWidget] {
        self.dashboard_widgets.as_slice()
    }

    /// Returns the capability-gated quick actions.
    #[must_use]
    pub fn quick_actions(&self) -> &[QuickAction] {
        self.quick_actions.as_slice()
    }

    /// Returns the flattened profile summary.
    #[must_use]
    pub fn profile_info(&self) -> &ProfileInfo {
        &self.profile_info
    }

    /// Returns whether the viewed user can reach a route.
    #[must_use]
    pub fn can_access_route(&self, route: &str) -> bool {
        self.sidebar_items.iter().any(|item| item.route == route)
    }

    /// Returns whether the viewed user is a student.
    #[must_use]
    pub fn is_student(&self) -> bool {
        self.role == Some(Role::Student)
    }

    /// Returns whether the viewed user is a faculty member.
    #[must_use]
    pub fn is_faculty(&self) -> bool {
        self.role == Some(Role::Faculty)
    }

    /// Returns whether the viewed user is an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

struct CachedView {
    user: Option<Arc<AuthenticatedUser>>,
    view: Arc<RoleView>,
}

/// Identity-memoized [`RoleView`] provider.
///
/// The snapshot is recomputed only when the user *reference* changes (login,
/// logout, profile refresh); handing in the same `Arc` returns the cached
/// snapshot untouched.
pub struct RoleViewBinding {
    cached: Mutex<Option<CachedView>>,
}

impl RoleViewBinding {
    /// Creates an empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cached: Mutex::new(None),
        }
    }

    /// Returns the view for the user, recomputing only on identity change.
    #[must_use]
    pub fn view(&self, user: Option<&Arc<AuthenticatedUser>>) -> Arc<RoleView> {
        let mut cached = self
            .cached
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(entry) = cached.as_ref() {
            if same_identity(entry.user.as_ref(), user) {
                return Arc::clone(&entry.view);
            }
        }

        let view = Arc::new(RoleView::for_user(user.map(Arc::as_ref)));
        *cached = Some(CachedView {
            user: user.map(Arc::clone),
            view: Arc::clone(&view),
        });

        view
    }
}

impl Default for RoleViewBinding {
    fn default() -> Self {
        Self::new()
    }
}

fn same_identity(
    left: Option<&Arc<AuthenticatedUser>>,
    right: Option<&Arc<AuthenticatedUser>>,
) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => Arc::ptr_eq(left, right),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use achievehub_domain::{Role, UserId};

    use super::*;

    fn student() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new(7),
            "asha",
            "asha@example.edu",
            "9876543210",
            Role::Student,
            None,
        )
    }

    #[test]
    fn anonymous_view_is_empty_and_safe() {
        let view = RoleView::for_user(None);
        assert_eq!(view.role(), None);
        assert!(view.sidebar_items().is_empty());
        assert_eq!(view.default_route(), "/");
        assert_eq!(view.display_name(), "Guest");
        assert!(!view.has_permission(achievehub_domain::Permission::ManageSystem));
        assert!(!view.is_student() && !view.is_faculty() && !view.is_admin());
    }

    #[test]
    fn same_user_reference_returns_cached_view() {
        let binding = RoleViewBinding::new();
        let user = Arc::new(student());

        let first = binding.view(Some(&user));
        let second = binding.view(Some(&user));
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn new_user_reference_recomputes_equal_view() {
        let binding = RoleViewBinding::new();
        let first_user = Arc::new(student());
        let second_user = Arc::new(student());

        let first = binding.view(Some(&first_user));
        let second = binding.view(Some(&second_user));
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[test]
    fn logout_switches_to_anonymous_view() {
        let binding = RoleViewBinding::new();
        let user = Arc::new(student());

        let authed = binding.view(Some(&user));
        assert!(authed.is_student());

        let anonymous = binding.view(None);
        assert_eq!(anonymous.role(), None);

        // Anonymous identity is stable too.
        let anonymous_again = binding.view(None);
        assert!(Arc::ptr_eq(&anonymous, &anonymous_again));
    }

    #[test]
    fn view_route_access_matches_sidebar() {
        let user = student();
        let view = RoleView::for_user(Some(&user));
        assert!(view.can_access_route("/student/dashboard"));
        assert!(!view.can_access_route("/admin/settings"));
    }
}
