use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use achievehub_core::AppError;
use tracing_subscriber::EnvFilter;

/// Source of authentication, selected by `AUTH_PROVIDER`.
#[derive(Debug, Clone)]
pub enum AuthProviderConfig {
    /// Seeded in-process accounts for development mode.
    Memory,
    /// Upstream portal backend at the given base URL.
    Http(String),
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub cookie_secure: bool,
    pub auth_provider: AuthProviderConfig,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());
        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);
        let cookie_secure = env::var("SESSION_COOKIE_SECURE")
            .unwrap_or_else(|_| "false".to_owned())
            .eq_ignore_ascii_case("true");

        let auth_provider = match env::var("AUTH_PROVIDER")
            .unwrap_or_else(|_| "memory".to_owned())
            .as_str()
        {
            "memory" => AuthProviderConfig::Memory,
            "http" => AuthProviderConfig::Http(required_env("UPSTREAM_API_URL")?),
            other => {
                return Err(AppError::Validation(format!(
                    "AUTH_PROVIDER must be either 'memory' or 'http', got '{other}'"
                )));
            }
        };

        Ok(Self {
            frontend_url,
            api_host,
            api_port,
            cookie_secure,
            auth_provider,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required_env(name: &str) -> Result<String, AppError> {
    env::var(name).map_err(|_| AppError::Validation(format!("{name} is required")))
}

#[cfg(test)]
mod tests {
    use super::ApiConfig;

    #[test]
    fn socket_address_rejects_bad_host() {
        let config = ApiConfig {
            frontend_url: "http://localhost:3000".to_owned(),
            api_host: "not-an-ip".to_owned(),
            api_port: 8080,
            cookie_secure: false,
            auth_provider: super::AuthProviderConfig::Memory,
        };

        assert!(config.socket_address().is_err());
    }
}
