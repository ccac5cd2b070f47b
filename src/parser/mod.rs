use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};
use crate::token::AccessToken;
use crate::utils::constants::DEFAULT_TOKEN_TTL_SECONDS;

/// Wire shape of the token endpoint response body.
///
/// The server controls this schema; only `access_token` is required here.
/// Tenants omit `token_type` and `expires_in` often enough that both get a
/// default instead of failing the exchange.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_token_type() -> String {
    "Bearer".to_owned()
}

fn default_expires_in() -> u64 {
    DEFAULT_TOKEN_TTL_SECONDS
}

/// Parse the response body of the token endpoint.
///
/// A body that is not JSON fails as a parse error; JSON that is missing a
/// usable `access_token` fails as a schema error. The two stay distinct so
/// the caller can tell a broken proxy from a contract change upstream.
pub fn parse_token(body: &str) -> Result<AccessToken> {
    let json: Value = serde_json::from_str(body)?;

    let response: TokenResponse =
        serde_json::from_value(json).map_err(|e| Error::Schema(e.to_string()))?;

    if response.access_token.is_empty() {
        return Err(Error::Schema("access_token is empty".to_owned()));
    }

    debug!(
        token_type = %response.token_type,
        expires_in = response.expires_in,
        "token response parsed"
    );
    Ok(AccessToken::new(
        response.access_token,
        response.token_type,
        response.expires_in,
    ))
}
