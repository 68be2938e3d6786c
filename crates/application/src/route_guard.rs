//! Declarative access requirements for guarded routes.

use achievehub_domain::{AuthenticatedUser, Permission, Role};

use crate::role_resolver;

/// Outcome of evaluating a guard requirement against a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// The user satisfies the requirement.
    Allow,
    /// The requirement needs an authenticated user and none is present.
    RequireLogin,
    /// The user is authenticated but fails a role or permission check.
    Deny,
}

/// Access requirement attached to a guarded route or view fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardRequirement {
    require_auth: bool,
    required_role: Option<Role>,
    required_permission: Option<Permission>,
}

impl GuardRequirement {
    /// A requirement satisfied by anyone, including anonymous visitors.
    #[must_use]
    pub fn public() -> Self {
        Self {
            require_auth: false,
            required_role: None,
            required_permission: None,
        }
    }

    /// A requirement satisfied by any authenticated user.
    #[must_use]
    pub fn authenticated() -> Self {
        Self {
            require_auth: true,
            required_role: None,
            required_permission: None,
        }
    }

    /// Narrows the requirement to one role.
    #[must_use]
    pub fn role(mut self, role: Role) -> Self {
        self.required_role = Some(role);
        self
    }

    /// Narrows the requirement to holders of one permission.
    #[must_use]
    pub fn permission(mut self, permission: Permission) -> Self {
        self.required_permission = Some(permission);
        self
    }

    /// Evaluates the requirement against a user. Fail-closed: an absent or
    /// mismatching user never yields [`GuardDecision::Allow`].
    #[must_use]
    pub fn evaluate(&self, user: Option<&AuthenticatedUser>) -> GuardDecision {
        if self.require_auth && user.is_none() {
            return GuardDecision::RequireLogin;
        }

        if let Some(required_role) = self.required_role {
            if user.map(AuthenticatedUser::role) != Some(required_role) {
                return GuardDecision::Deny;
            }
        }

        if let Some(required_permission) = self.required_permission {
            if !role_resolver::has_permission(user, required_permission) {
                return GuardDecision::Deny;
            }
        }

        GuardDecision::Allow
    }
}
