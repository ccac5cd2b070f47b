// tests/common/mod.rs
use crate::config::settings::AuthConfig;

pub const TOKEN_PATH: &str = "/AuthServer/api/Token";

/// Config pointed at a mock authorization server.
pub fn test_config(base_url: &str) -> AuthConfig {
    AuthConfig {
        token_url: format!("{}{}", base_url, TOKEN_PATH),
        client_id: "client-id".to_owned(),
        client_secret: "client-secret".to_owned(),
        user_login_id: "47".to_owned(),
        timeout_ms: 5000,
    }
}
