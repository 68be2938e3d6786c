//! Authentication orchestration over the gateway port.

use std::sync::Arc;

use achievehub_core::AppResult;
use achievehub_domain::AuthenticatedUser;

use crate::auth_gateway::{AuthGateway, AuthSession, Credentials, Registration};

/// Application service for login, registration, and session refresh.
///
/// Login and registration responses from the upstream backend carry only a
/// partial user record, so both flows fetch the full snapshot (including the
/// role-specific profile) with the issued token before returning.
#[derive(Clone)]
pub struct AuthService {
    gateway: Arc<dyn AuthGateway>,
}

impl AuthService {
    /// Creates the service from a gateway implementation.
    #[must_use]
    pub fn new(gateway: Arc<dyn AuthGateway>) -> Self {
        Self { gateway }
    }

    /// Authenticates and returns a session with the full user snapshot.
    pub async fn login(&self, credentials: &Credentials) -> AppResult<AuthSession> {
        let session = self.gateway.login(credentials).await?;
        let user = self.gateway.current_user(&session.token).await?;

        Ok(AuthSession {
            token: session.token,
            user,
        })
    }

    /// Registers an account and returns a session with the full snapshot.
    pub async fn register(&self, registration: &Registration) -> AppResult<AuthSession> {
        let session = self.gateway.register(registration).await?;
        let user = self.gateway.current_user(&session.token).await?;

        Ok(AuthSession {
            token: session.token,
            user,
        })
    }

    /// Refreshes the user snapshot for an existing token.
    pub async fn current_user(&self, token: &str) -> AppResult<AuthenticatedUser> {
        self.gateway.current_user(token).await
    }
}

#[cfg(test)]
mod tests {
    use achievehub_core::AppError;
    use achievehub_domain::{FacultyProfile, Role, UserId, UserProfile};
    use async_trait::async_trait;

    use super::*;

    /// Gateway whose login answer omits the profile, like the upstream
    /// backend's token response does.
    struct PartialSnapshotGateway;

    fn bare_user() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new(3),
            "drrao",
            "rao@example.edu",
            "9123456780",
            Role::Faculty,
            None,
        )
    }

    fn full_user() -> AuthenticatedUser {
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

    #[async_trait]
    impl AuthGateway for PartialSnapshotGateway {
        async fn login(&self, credentials: &Credentials) -> AppResult<AuthSession> {
            if credentials.password == "correct-horse" {
                Ok(AuthSession {
                    token: "issued-token".to_owned(),
                    user: bare_user(),
                })
            } else {
                Err(AppError::Unauthorized("invalid credentials".to_owned()))
            }
        }

        async fn register(&self, _registration: &Registration) -> AppResult<AuthSession> {
            Ok(AuthSession {
                token: "issued-token".to_owned(),
                user: bare_user(),
            })
        }

        async fn current_user(&self, token: &str) -> AppResult<AuthenticatedUser> {
            if token == "issued-token" {
                Ok(full_user())
            } else {
                Err(AppError::Unauthorized("unknown token".to_owned()))
            }
        }
    }

    #[tokio::test]
    async fn login_returns_full_snapshot() {
        let service = AuthService::new(Arc::new(PartialSnapshotGateway));
        let credentials = Credentials {
            username_or_email: "drrao".to_owned(),
            password: "correct-horse".to_owned(),
            captcha: "7".to_owned(),
        };

        let session = service.login(&credentials).await;
        let session = match session {
            Ok(session) => session,
            Err(error) => panic!("login must succeed: {error}"),
        };

        assert_eq!(session.token, "issued-token");
        assert!(session.user.profile().is_some());
        assert_eq!(session.user.preferred_name(), "Dr. Rao");
    }

    #[tokio::test]
    async fn bad_credentials_propagate_unauthorized() {
        let service = AuthService::new(Arc::new(PartialSnapshotGateway));
        let credentials = Credentials {
            username_or_email: "drrao".to_owned(),
            password: "wrong".to_owned(),
            captcha: "7".to_owned(),
        };

        let result = service.login(&credentials).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
