//! Shared constants and invariants

/// Token issuance endpoint of the warehouse management authorization server.
pub const DEFAULT_TOKEN_URL: &str = "https://secure-wms.com/AuthServer/api/Token";

pub const GRANT_TYPE_CLIENT_CREDENTIALS: &str = "client_credentials";

pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 20_000;
pub const DEFAULT_TOKEN_TTL_SECONDS: u64 = 3600;

// Environment variables resolved by AuthConfig::from_env
pub const ENV_TOKEN_URL: &str = "WMS_TOKEN_URL";
pub const ENV_CLIENT_ID: &str = "WMS_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "WMS_CLIENT_SECRET";
pub const ENV_USER_LOGIN_ID: &str = "WMS_USER_LOGIN_ID";
pub const ENV_HTTP_TIMEOUT_MS: &str = "WMS_HTTP_TIMEOUT_MS";
