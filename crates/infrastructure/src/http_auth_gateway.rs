//! HTTP adapter for the upstream authentication REST contract.

use std::time::Duration;

use achievehub_application::{AuthGateway, AuthSession, Credentials, Registration};
use achievehub_core::{AppError, AppResult};
use achievehub_domain::{AuthenticatedUser, Role, ScholarType, UserId, UserProfile};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginBody<'a> {
    username_or_email: &'a str,
    password: &'a str,
    captcha: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterBody<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
    phone_number: &'a str,
    role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    degree: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dob: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    roll_number: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    scholar_type: Option<ScholarType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    department: Option<&'a str>,
}

/// Token response returned by the upstream login and register endpoints.
/// It carries a partial user record without the phone number; callers fetch
/// the full snapshot via `/api/auth/me` afterwards.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
    id: i64,
    username: String,
    email: String,
    role: Role,
    #[serde(default)]
    profile: Option<UserProfile>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: String,
}

/// [`AuthGateway`] implementation over the upstream portal backend.
pub struct HttpAuthGateway {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpAuthGateway {
    /// Creates a gateway for the given upstream base URL.
    pub fn new(base_url: &str) -> AppResult<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|error| AppError::Validation(format!("invalid upstream URL: {error}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AppError::Validation(format!(
                "upstream URL must be http or https, got '{}'",
                parsed.scheme()
            )));
        }

        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|error| {
                AppError::Internal(format!("failed to build upstream HTTP client: {error}"))
            })?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn token_session(&self, response: reqwest::Response) -> AppResult<AuthSession> {
        let body: TokenResponse = response.json().await.map_err(|error| {
            AppError::Upstream(format!("invalid token response from backend: {error}"))
        })?;

        // The token response omits the phone number; the full snapshot is
        // fetched separately with the issued token.
        let user = AuthenticatedUser::new(
            UserId::new(body.id),
            body.username,
            body.email,
            String::new(),
            body.role,
            body.profile,
        );

        Ok(AuthSession {
            token: body.token,
            user,
        })
    }
}

async fn error_from_response(response: reqwest::Response) -> AppError {
    let status = response.status();
    let message = response
        .json::<UpstreamErrorBody>()
        .await
        .map(|body| body.message)
        .unwrap_or_else(|_| status.to_string());

    map_upstream_status(status, message)
}

fn map_upstream_status(status: reqwest::StatusCode, message: String) -> AppError {
    match status {
        reqwest::StatusCode::UNAUTHORIZED => AppError::Unauthorized(message),
        reqwest::StatusCode::BAD_REQUEST => AppError::Validation(message),
        reqwest::StatusCode::NOT_FOUND => AppError::NotFound(message),
        reqwest::StatusCode::CONFLICT => AppError::Conflict(message),
        _ => AppError::Upstream(format!("backend returned {status}: {message}")),
    }
}

fn transport_error(operation: &str, error: reqwest::Error) -> AppError {
    AppError::Upstream(format!("{operation} request to backend failed: {error}"))
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, credentials: &Credentials) -> AppResult<AuthSession> {
        let response = self
            .http_client
            .post(self.endpoint("/api/auth/login"))
            .json(&LoginBody {
                username_or_email: credentials.username_or_email.as_str(),
                password: credentials.password.as_str(),
                captcha: credentials.captcha.as_str(),
            })
            .send()
            .await
            .map_err(|error| transport_error("login", error))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        self.token_session(response).await
    }

    async fn register(&self, registration: &Registration) -> AppResult<AuthSession> {
        let response = self
            .http_client
            .post(self.endpoint("/api/auth/register"))
            .json(&RegisterBody {
                username: registration.username.as_str(),
                email: registration.email.as_str(),
                password: registration.password.as_str(),
                phone_number: registration.phone_number.as_str(),
                role: registration.role,
                name: registration.name.as_deref(),
                degree: registration.degree.as_deref(),
                dob: registration.dob,
                roll_number: registration.roll_number.as_deref(),
                scholar_type: registration.scholar_type,
                department: registration.department.as_deref(),
            })
            .send()
            .await
            .map_err(|error| transport_error("register", error))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        self.token_session(response).await
    }

    async fn current_user(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let response = self
            .http_client
            .get(self.endpoint("/api/auth/me"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|error| transport_error("current user", error))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        response.json().await.map_err(|error| {
            AppError::Upstream(format!("invalid user payload from backend: {error}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use achievehub_core::AppError;
    use reqwest::StatusCode;

    use super::{HttpAuthGateway, map_upstream_status};

    #[test]
    fn rejects_malformed_base_url() {
        assert!(HttpAuthGateway::new("not a url").is_err());
        assert!(HttpAuthGateway::new("ftp://example.com").is_err());
    }

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let gateway = HttpAuthGateway::new("http://localhost:8081/");
        let gateway = match gateway {
            Ok(gateway) => gateway,
            Err(error) => panic!("valid URL must be accepted: {error}"),
        };
        assert_eq!(
            gateway.endpoint("/api/auth/me"),
            "http://localhost:8081/api/auth/me"
        );
    }

    #[test]
    fn upstream_401_maps_to_unauthorized() {
        let error = map_upstream_status(StatusCode::UNAUTHORIZED, "bad credentials".to_owned());
        assert!(matches!(error, AppError::Unauthorized(_)));
    }

    #[test]
    fn upstream_client_errors_map_to_their_categories() {
        assert!(matches!(
            map_upstream_status(StatusCode::BAD_REQUEST, "missing field".to_owned()),
            AppError::Validation(_)
        ));
        assert!(matches!(
            map_upstream_status(StatusCode::NOT_FOUND, "no such user".to_owned()),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            map_upstream_status(StatusCode::CONFLICT, "username taken".to_owned()),
            AppError::Conflict(_)
        ));
    }

    #[test]
    fn unexpected_upstream_statuses_map_to_upstream() {
        let error = map_upstream_status(StatusCode::SERVICE_UNAVAILABLE, "down".to_owned());
        let error = match error {
            AppError::Upstream(message) => message,
            other => panic!("expected upstream error, got {other}"),
        };
        assert!(error.contains("503"));
    }
}
