use chrono::Utc;

/// Access token structure
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub value: String,
    pub token_type: String, // e.g. "Bearer"
    pub exp_unix_ts: u64,   // UNIX TIMESTAMP
}

impl AccessToken {
    /// Build a token from the server-reported lifetime.
    pub fn new(value: String, token_type: String, expires_in_seconds: u64) -> Self {
        let exp_unix_ts = Utc::now().timestamp() as u64 + expires_in_seconds;
        Self {
            value,
            token_type,
            exp_unix_ts,
        }
    }

    /// Check if token is expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() as u64 >= self.exp_unix_ts
    }

    /// Seconds until expiration, zero once expired.
    pub fn remaining_seconds(&self) -> u64 {
        self.exp_unix_ts
            .saturating_sub(Utc::now().timestamp() as u64)
    }
}
