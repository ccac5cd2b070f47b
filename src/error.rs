use thiserror::Error;

/// The error type for token fetch operations.
///
/// Each failure mode of the exchange maps to exactly one variant, so callers
/// can tell a transport failure from a bad response body.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration is missing or invalid (names the offending variable).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Connection, TLS or transport failure before a response was read.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The exchange did not complete within the configured deadline.
    #[error("token request timed out after {0} ms")]
    Timeout(u64),

    /// The server answered with a non-2xx status.
    #[error("token endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body is not valid UTF-8.
    #[error("response body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// The response body is not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response is JSON but not a usable token response.
    #[error("token response has unexpected shape: {0}")]
    Schema(String),
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;
