//! Port for the external authentication backend.

use achievehub_core::AppResult;
use achievehub_domain::{AuthenticatedUser, Role, ScholarType};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Login credentials forwarded to the upstream backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Username or account email.
    pub username_or_email: String,
    /// Plaintext password (verified upstream, never stored here).
    pub password: String,
    /// Captcha answer required by the upstream login endpoint.
    pub captcha: String,
}

/// Registration payload forwarded to the upstream backend.
///
/// The profile fields are role-specific: students fill degree, date of
/// birth, roll number, and scholar type; faculty fill department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Login username.
    pub username: String,
    /// Account email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Requested role. The upstream backend only accepts student and
    /// faculty self-registration; administrators are provisioned out of
    /// band.
    pub role: Role,
    /// Full name.
    pub name: Option<String>,
    /// Enrolled degree (students).
    pub degree: Option<String>,
    /// Date of birth (students).
    pub dob: Option<NaiveDate>,
    /// Roll number (students).
    pub roll_number: Option<String>,
    /// Residence category (students).
    pub scholar_type: Option<ScholarType>,
    /// Department (faculty).
    pub department: Option<String>,
}

/// Token plus user snapshot returned by a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// Opaque bearer token for subsequent upstream calls.
    pub token: String,
    /// User snapshot at authentication time.
    pub user: AuthenticatedUser,
}

/// Gateway port for the upstream authentication REST contract.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Authenticates with credentials and returns a session.
    async fn login(&self, credentials: &Credentials) -> AppResult<AuthSession>;

    /// Creates an account and returns the initial session.
    async fn register(&self, registration: &Registration) -> AppResult<AuthSession>;

    /// Fetches the current user snapshot for a bearer token.
    async fn current_user(&self, token: &str) -> AppResult<AuthenticatedUser>;
}
