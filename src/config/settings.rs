use std::env;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Error, Result};
use crate::utils::constants::*;

/// ================================
/// Auth exchange settings
/// ================================
///
/// All values come from the environment; the credential pair and the user
/// login id have no defaults and must be provided by the caller's secret
/// store.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
    /// Login id forwarded in the request body. The upstream tenant assigns
    /// this value; there is no meaningful default.
    pub user_login_id: String,
    pub timeout_ms: u64,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            token_url: env::var(ENV_TOKEN_URL).unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_owned()),
            client_id: required_env(ENV_CLIENT_ID)?,
            client_secret: required_env(ENV_CLIENT_SECRET)?,
            user_login_id: required_env(ENV_USER_LOGIN_ID)?,
            timeout_ms: optional_env_u64(ENV_HTTP_TIMEOUT_MS)?.unwrap_or(DEFAULT_HTTP_TIMEOUT_MS),
        })
    }

    /// `Authorization` header value for the token request:
    /// `Basic base64(client_id:client_secret)`.
    pub fn basic_authorization(&self) -> String {
        let credential = STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret));
        format!("Basic {}", credential)
    }
}

fn required_env(name: &str) -> Result<String> {
    env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::Config(format!("missing required environment variable {}", name)))
}

fn optional_env_u64(name: &str) -> Result<Option<u64>> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<u64>()
            .map(Some)
            .map_err(|e| Error::Config(format!("invalid value for {}: {}", name, e))),
        Err(_) => Ok(None),
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "json".to_string())
            .to_lowercase()
            .as_str()
        {
            "compact" | "text" => LogFormat::Compact,
            _ => LogFormat::Json,
        }
    }
}
