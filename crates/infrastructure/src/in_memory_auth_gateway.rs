//! In-memory adapter for development mode and tests.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use achievehub_application::{AuthGateway, AuthSession, Credentials, Registration};
use achievehub_core::{AppError, AppResult, NonEmptyString};
use achievehub_domain::{
    AuthenticatedUser, FacultyProfile, Role, ScholarType, StudentProfile, UserId, UserProfile,
};
use async_trait::async_trait;
use chrono::NaiveDate;

struct Account {
    password: String,
    user: AuthenticatedUser,
}

struct State {
    accounts: HashMap<String, Account>,
    tokens: HashMap<String, String>,
    next_user_id: i64,
}

/// [`AuthGateway`] backed by a seeded in-process account table.
///
/// Passwords are compared in plaintext and tokens are deterministic; this
/// adapter exists for development mode and tests only.
pub struct InMemoryAuthGateway {
    state: Mutex<State>,
}

impl InMemoryAuthGateway {
    /// Creates an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                accounts: HashMap::new(),
                tokens: HashMap::new(),
                next_user_id: 1,
            }),
        }
    }

    /// Creates a gateway seeded with one demo account per role, all with
    /// the password `demo-password`.
    #[must_use]
    pub fn with_demo_accounts() -> Self {
        let gateway = Self::new();

        {
            let mut state = gateway.lock_state();
            let dob = NaiveDate::from_ymd_opt(2004, 6, 14).unwrap_or_default();

            let student = AuthenticatedUser::new(
                UserId::new(1),
                "asha",
                "asha@example.edu",
                "9876543210",
                Role::Student,
                Some(UserProfile::Student(StudentProfile::new(
                    1,
                    "Asha",
                    "asha@example.edu",
                    "9876543210",
                    "B.Tech CSE",
                    dob,
                    "21CS118",
                    ScholarType::Hosteller,
                ))),
            );
            let faculty = AuthenticatedUser::new(
                UserId::new(2),
                "drrao",
                "rao@example.edu",
                "9123456780",
                Role::Faculty,
                Some(UserProfile::Faculty(FacultyProfile::new(
                    2,
                    "Dr. Rao",
                    "rao@example.edu",
                    "9123456780",
                    "Computer Science",
                ))),
            );
            let admin = AuthenticatedUser::new(
                UserId::new(3),
                "admin1",
                "admin@example.edu",
                "9000000000",
                Role::Admin,
                None,
            );

            for user in [student, faculty, admin] {
                state.accounts.insert(
                    user.username().to_owned(),
                    Account {
                        password: "demo-password".to_owned(),
                        user,
                    },
                );
            }
            state.next_user_id = 4;
        }

        gateway
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn issue_token(state: &mut State, user: &AuthenticatedUser) -> String {
        let token = format!("memory-token-{}", user.id());
        state
            .tokens
            .insert(token.clone(), user.username().to_owned());
        token
    }
}

impl Default for InMemoryAuthGateway {
    fn default() -> Self {
        Self::new()
    }
}

fn required_field(value: &str, field: &str) -> AppResult<NonEmptyString> {
    NonEmptyString::new(value)
        .map_err(|_| AppError::Validation(format!("{field} must not be empty")))
}

fn profile_from_registration(
    registration: &Registration,
    profile_id: i64,
) -> AppResult<UserProfile> {
    let name = registration
        .name
        .as_deref()
        .ok_or_else(|| AppError::Validation("registration requires a name".to_owned()))?;

    match registration.role {
        Role::Student => {
            let degree = registration.degree.as_deref().ok_or_else(|| {
                AppError::Validation("student registration requires a degree".to_owned())
            })?;
            let dob = registration.dob.ok_or_else(|| {
                AppError::Validation("student registration requires a date of birth".to_owned())
            })?;
            let roll_number = registration.roll_number.as_deref().ok_or_else(|| {
                AppError::Validation("student registration requires a roll number".to_owned())
            })?;
            let scholar_type = registration.scholar_type.ok_or_else(|| {
                AppError::Validation("student registration requires a scholar type".to_owned())
            })?;

            Ok(UserProfile::Student(StudentProfile::new(
                profile_id,
                name,
                registration.email.as_str(),
                registration.phone_number.as_str(),
                degree,
                dob,
                roll_number,
                scholar_type,
            )))
        }
        Role::Faculty => {
            let department = registration.department.as_deref().ok_or_else(|| {
                AppError::Validation("faculty registration requires a department".to_owned())
            })?;

            Ok(UserProfile::Faculty(FacultyProfile::new(
                profile_id,
                name,
                registration.email.as_str(),
                registration.phone_number.as_str(),
                department,
            )))
        }
        Role::Admin => Err(AppError::Validation(
            "administrators are provisioned out of band".to_owned(),
        )),
    }
}

#[async_trait]
impl AuthGateway for InMemoryAuthGateway {
    async fn login(&self, credentials: &Credentials) -> AppResult<AuthSession> {
        required_field(&credentials.username_or_email, "usernameOrEmail")?;
        required_field(&credentials.password, "password")?;

        let mut state = self.lock_state();

        let account = state
            .accounts
            .values()
            .find(|account| {
                account.user.username() == credentials.username_or_email
                    || account.user.email() == credentials.username_or_email
            })
            .filter(|account| account.password == credentials.password);

        let user = match account {
            Some(account) => account.user.clone(),
            None => {
                return Err(AppError::Unauthorized(
                    "invalid username or password".to_owned(),
                ));
            }
        };

        let token = Self::issue_token(&mut state, &user);
        Ok(AuthSession { token, user })
    }

    async fn register(&self, registration: &Registration) -> AppResult<AuthSession> {
        let username = required_field(&registration.username, "username")?;
        required_field(&registration.email, "email")?;
        required_field(&registration.password, "password")?;

        let mut state = self.lock_state();

        if state.accounts.contains_key(username.as_str()) {
            return Err(AppError::Conflict(format!(
                "username '{}' is already taken",
                username.as_str()
            )));
        }

        let user_id = state.next_user_id;
        let profile = profile_from_registration(registration, user_id)?;
        let user = AuthenticatedUser::new(
            UserId::new(user_id),
            registration.username.as_str(),
            registration.email.as_str(),
            registration.phone_number.as_str(),
            registration.role,
            Some(profile),
        );

        state.next_user_id += 1;
        state.accounts.insert(
            String::from(username),
            Account {
                password: registration.password.clone(),
                user: user.clone(),
            },
        );

        let token = Self::issue_token(&mut state, &user);
        Ok(AuthSession { token, user })
    }

    async fn current_user(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let state = self.lock_state();

        state
            .tokens
            .get(token)
            .and_then(|username| state.accounts.get(username))
            .map(|account| account.user.clone())
            .ok_or_else(|| AppError::Unauthorized("unknown or expired token".to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_credentials(username: &str) -> Credentials {
        Credentials {
            username_or_email: username.to_owned(),
            password: "demo-password".to_owned(),
            captcha: "7".to_owned(),
        }
    }

    #[tokio::test]
    async fn demo_student_can_login_and_refresh() {
        let gateway = InMemoryAuthGateway::with_demo_accounts();

        let session = gateway.login(&demo_credentials("asha")).await;
        let session = match session {
            Ok(session) => session,
            Err(error) => panic!("seeded login must succeed: {error}"),
        };
        assert_eq!(session.user.role(), Role::Student);

        let refreshed = gateway.current_user(&session.token).await;
        assert_eq!(refreshed.ok().map(|user| user.id()), Some(session.user.id()));
    }

    #[tokio::test]
    async fn login_by_email_is_supported() {
        let gateway = InMemoryAuthGateway::with_demo_accounts();
        let result = gateway.login(&demo_credentials("rao@example.edu")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn blank_login_fields_are_rejected_before_lookup() {
        let gateway = InMemoryAuthGateway::with_demo_accounts();
        let mut credentials = demo_credentials("asha");
        credentials.username_or_email = "   ".to_owned();

        let result = gateway.login(&credentials).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let gateway = InMemoryAuthGateway::with_demo_accounts();
        let mut credentials = demo_credentials("asha");
        credentials.password = "wrong".to_owned();

        let result = gateway.login(&credentials).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    fn faculty_registration(username: &str) -> Registration {
        Registration {
            username: username.to_owned(),
            email: format!("{username}@example.edu"),
            password: "a-long-password".to_owned(),
            phone_number: "9111111111".to_owned(),
            role: Role::Faculty,
            name: Some("New Faculty".to_owned()),
            degree: None,
            dob: None,
            roll_number: None,
            scholar_type: None,
            department: Some("Mathematics".to_owned()),
        }
    }

    #[tokio::test]
    async fn registration_creates_a_working_account() {
        let gateway = InMemoryAuthGateway::new();

        let session = gateway.register(&faculty_registration("newfac")).await;
        let session = match session {
            Ok(session) => session,
            Err(error) => panic!("registration must succeed: {error}"),
        };
        assert!(matches!(
            session.user.profile(),
            Some(UserProfile::Faculty(_))
        ));

        let login = gateway
            .login(&Credentials {
                username_or_email: "newfac".to_owned(),
                password: "a-long-password".to_owned(),
                captcha: String::new(),
            })
            .await;
        assert!(login.is_ok());
    }

    #[tokio::test]
    async fn blank_registration_username_is_rejected() {
        let gateway = InMemoryAuthGateway::new();
        let mut registration = faculty_registration("blank");
        registration.username = String::new();

        let result = gateway.register(&registration).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        let gateway = InMemoryAuthGateway::new();
        let first = gateway.register(&faculty_registration("dup")).await;
        assert!(first.is_ok());

        let second = gateway.register(&faculty_registration("dup")).await;
        assert!(matches!(second, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn student_registration_requires_profile_fields() {
        let gateway = InMemoryAuthGateway::new();
        let mut registration = faculty_registration("stu");
        registration.role = Role::Student;
        registration.department = None;

        let result = gateway.register(&registration).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn admin_registration_is_rejected() {
        let gateway = InMemoryAuthGateway::new();
        let mut registration = faculty_registration("boss");
        registration.role = Role::Admin;

        let result = gateway.register(&registration).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn unknown_token_is_unauthorized() {
        let gateway = InMemoryAuthGateway::with_demo_accounts();
        let result = gateway.current_user("bogus").await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
