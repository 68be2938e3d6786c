//! Authenticated user snapshot and role-specific profiles.
//!
//! These records mirror the upstream backend's JSON user payloads. Their
//! lifecycle (creation, session expiry, logout) is owned by the upstream
//! authentication service; this codebase only reads them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Unique identifier for a user record, assigned by the upstream backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(i64);

impl UserId {
    /// Creates a user identifier from an upstream value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Residence category for a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScholarType {
    /// Lives in a hostel on campus.
    Hosteller,
    /// Commutes from home.
    DayScholar,
}

impl ScholarType {
    /// Returns the stable wire value for this scholar type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hosteller => "HOSTELLER",
            Self::DayScholar => "DAY_SCHOLAR",
        }
    }
}

/// Student profile attached to a student account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    id: i64,
    name: String,
    email: String,
    phone_number: String,
    degree: String,
    dob: NaiveDate,
    roll_number: String,
    #[serde(rename = "type")]
    scholar_type: ScholarType,
}

impl StudentProfile {
    /// Creates a student profile snapshot.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
        degree: impl Into<String>,
        dob: NaiveDate,
        roll_number: impl Into<String>,
        scholar_type: ScholarType,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            degree: degree.into(),
            dob,
            roll_number: roll_number.into(),
            scholar_type,
        }
    }

    /// Returns the student's full name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the profile email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Returns the profile phone number.
    #[must_use]
    pub fn phone_number(&self) -> &str {
        self.phone_number.as_str()
    }

    /// Returns the enrolled degree.
    #[must_use]
    pub fn degree(&self) -> &str {
        self.degree.as_str()
    }

    /// Returns the date of birth.
    #[must_use]
    pub fn dob(&self) -> NaiveDate {
        self.dob
    }

    /// Returns the roll number.
    #[must_use]
    pub fn roll_number(&self) -> &str {
        self.roll_number.as_str()
    }

    /// Returns the residence category.
    #[must_use]
    pub fn scholar_type(&self) -> ScholarType {
        self.scholar_type
    }
}

/// Faculty profile attached to a faculty account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyProfile {
    id: i64,
    name: String,
    email: String,
    phone_number: String,
    department: String,
}

impl FacultyProfile {
    /// Creates a faculty profile snapshot.
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            department: department.into(),
        }
    }

    /// Returns the faculty member's full name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the profile email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Returns the profile phone number.
    #[must_use]
    pub fn phone_number(&self) -> &str {
        self.phone_number.as_str()
    }

    /// Returns the department.
    #[must_use]
    pub fn department(&self) -> &str {
        self.department.as_str()
    }
}

/// Role-specific profile payload.
///
/// The upstream contract carries the profile without a discriminator; the
/// student shape is tried first because it has the stricter field set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserProfile {
    /// Student profile.
    Student(StudentProfile),
    /// Faculty profile.
    Faculty(FacultyProfile),
}

impl UserProfile {
    /// Returns the profile holder's full name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Student(profile) => profile.name(),
            Self::Faculty(profile) => profile.name(),
        }
    }

    /// Returns the profile email.
    #[must_use]
    pub fn email(&self) -> &str {
        match self {
            Self::Student(profile) => profile.email(),
            Self::Faculty(profile) => profile.email(),
        }
    }
}

/// Authenticated user snapshot read from the upstream session contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    id: UserId,
    username: String,
    email: String,
    phone_number: String,
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile: Option<UserProfile>,
}

impl AuthenticatedUser {
    /// Creates a user snapshot.
    #[must_use]
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
        role: Role,
        profile: Option<UserProfile>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            role,
            profile,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the login username.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Returns the account email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Returns the account phone number.
    #[must_use]
    pub fn phone_number(&self) -> &str {
        self.phone_number.as_str()
    }

    /// Returns the assigned role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the role-specific profile, if the backend returned one.
    #[must_use]
    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Returns the profile name, falling back to the username when the
    /// profile is absent.
    #[must_use]
    pub fn preferred_name(&self) -> &str {
        self.profile
            .as_ref()
            .map_or(self.username.as_str(), UserProfile::name)
    }
}
