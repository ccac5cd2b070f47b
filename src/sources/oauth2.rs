use std::time::Duration;

use reqwest::{header, Client};
use serde::Serialize;
use tracing::debug;

use crate::config::settings::AuthConfig;
use crate::error::{Error, Result};
use crate::parser::parse_token;
use crate::token::AccessToken;
use crate::utils::constants::GRANT_TYPE_CLIENT_CREDENTIALS;

/// Request body of the exchange. Invariant: exactly these two fields,
/// serialized as JSON.
#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    grant_type: &'a str,
    user_login_id: &'a str,
}

#[derive(Debug, Clone)]
pub struct OAuth2Source {
    pub cfg: AuthConfig,
    pub client: Client,
}

impl OAuth2Source {
    pub fn new(cfg: AuthConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()
            .map_err(Error::Network)?;
        Ok(Self { cfg, client })
    }

    /// Perform one client-credentials exchange and return the parsed token.
    ///
    /// Exactly one request per call; no retries, no caching.
    pub async fn fetch_token(&self) -> Result<AccessToken> {
        let body = TokenRequest {
            grant_type: GRANT_TYPE_CLIENT_CREDENTIALS,
            user_login_id: &self.cfg.user_login_id,
        };

        debug!(url = %self.cfg.token_url, "requesting access token");
        let response = self
            .client
            .post(&self.cfg.token_url)
            .header(header::AUTHORIZATION, self.cfg.basic_authorization())
            .header(header::ACCEPT, "application/json")
            .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.8")
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        let text = String::from_utf8(bytes.to_vec())?;

        if !status.is_success() {
            return Err(Error::Status { status, body: text });
        }

        // body carries the token value, keep it out of default-level logs
        debug!(response = %text, "token endpoint response");
        parse_token(&text)
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout(self.cfg.timeout_ms)
        } else {
            Error::Network(e)
        }
    }
}
