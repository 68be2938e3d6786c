//! Wire payloads for the API surface.
//!
//! Responses carry the upstream portal's JSON vocabulary: camelCase keys,
//! `canXxx` permission flags, and `SCREAMING_SNAKE_CASE` role tags.

use achievehub_application::{Credentials, ProfileDetails, ProfileInfo, Registration, RoleView};
use achievehub_domain::{
    DashboardWidget, Icon, NavigationItem, PermissionSet, QuickAction, Role, ScholarType,
    SidebarItem,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
    #[serde(default)]
    pub captcha: String,
}

impl From<LoginRequest> for Credentials {
    fn from(value: LoginRequest) -> Self {
        Self {
            username_or_email: value.username_or_email,
            password: value.password,
            captcha: value.captcha,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub role: Role,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub dob: Option<NaiveDate>,
    #[serde(default)]
    pub roll_number: Option<String>,
    #[serde(rename = "type", default)]
    pub scholar_type: Option<ScholarType>,
    #[serde(default)]
    pub department: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(value: RegisterRequest) -> Self {
        Self {
            username: value.username,
            email: value.email,
            password: value.password,
            phone_number: value.phone_number,
            role: value.role,
            name: value.name,
            degree: value.degree,
            dob: value.dob,
            roll_number: value.roll_number,
            scholar_type: value.scholar_type,
            department: value.department,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItemResponse {
    pub name: &'static str,
    pub href: &'static str,
    pub requires_auth: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_permission: Option<&'static str>,
}

impl From<NavigationItem> for NavigationItemResponse {
    fn from(value: NavigationItem) -> Self {
        Self {
            name: value.name,
            href: value.href,
            requires_auth: value.requires_auth,
            required_permission: value.required_permission.map(|p| p.as_str()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarItemResponse {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: Icon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_permission: Option<&'static str>,
}

impl From<SidebarItem> for SidebarItemResponse {
    fn from(value: SidebarItem) -> Self {
        Self {
            title: value.title,
            url: value.route,
            icon: value.icon,
            description: value.description,
            required_permission: value.required_permission.map(|p| p.as_str()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardWidgetResponse {
    pub title: &'static str,
    pub icon: Icon,
    pub url: &'static str,
    pub required_permission: &'static str,
}

impl From<DashboardWidget> for DashboardWidgetResponse {
    fn from(value: DashboardWidget) -> Self {
        Self {
            title: value.title,
            icon: value.icon,
            url: value.route,
            required_permission: value.required_permission.as_str(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickActionResponse {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub icon: Icon,
    pub action: &'static str,
    pub required_permission: &'static str,
}

impl From<QuickAction> for QuickActionResponse {
    fn from(value: QuickAction) -> Self {
        Self {
            title: value.title,
            description: value.description,
            icon: value.icon,
            action: value.action,
            required_permission: value.required_permission.as_str(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfoResponse {
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scholar_type: Option<ScholarType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl From<&ProfileInfo> for ProfileInfoResponse {
    fn from(value: &ProfileInfo) -> Self {
        let mut response = Self {
            name: value.name.clone(),
            email: value.email.clone(),
            role: value.role_label.clone(),
            roll_number: None,
            degree: None,
            scholar_type: None,
            date_of_birth: None,
            department: None,
        };

        match &value.details {
            ProfileDetails::None => {}
            ProfileDetails::Student {
                roll_number,
                degree,
                scholar_type,
                date_of_birth,
            } => {
                response.roll_number = Some(roll_number.clone());
                response.degree = Some(degree.clone());
                response.scholar_type = Some(*scholar_type);
                response.date_of_birth = Some(*date_of_birth);
            }
            ProfileDetails::Faculty { department } => {
                response.department = Some(department.clone());
            }
        }

        response
    }
}

/// Full role view snapshot for the authenticated user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleViewResponse {
    pub role: Option<&'static str>,
    pub display_name: String,
    pub default_route: &'static str,
    pub is_student: bool,
    pub is_faculty: bool,
    pub is_admin: bool,
    pub permissions: Option<&'static PermissionSet>,
    pub sidebar_items: Vec<SidebarItemResponse>,
    pub navigation_items: Vec<NavigationItemResponse>,
    pub dashboard_widgets: Vec<DashboardWidgetResponse>,
    pub quick_actions: Vec<QuickActionResponse>,
    pub profile: ProfileInfoResponse,
}

impl RoleViewResponse {
    pub fn from_view(view: &RoleView) -> Self {
        Self {
            role: view.role().map(|role| role.as_str()),
            display_name: view.display_name().to_owned(),
            default_route: view.default_route(),
            is_student: view.is_student(),
            is_faculty: view.is_faculty(),
            is_admin: view.is_admin(),
            permissions: view.permissions(),
            sidebar_items: view.sidebar_items().iter().copied().map(Into::into).collect(),
            navigation_items: view
                .navigation_items()
                .iter()
                .copied()
                .map(Into::into)
                .collect(),
            dashboard_widgets: view
                .dashboard_widgets()
                .iter()
                .copied()
                .map(Into::into)
                .collect(),
            quick_actions: view.quick_actions().iter().copied().map(Into::into).collect(),
            profile: ProfileInfoResponse::from(view.profile_info()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RouteAccessResponse {
    pub route: String,
    pub allowed: bool,
}
