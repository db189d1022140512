//! Authentication core configuration.

use std::env;

use chrono::Duration;

/// Configuration consumed by the use-case layer.
///
/// Signing-key material, connection strings and bind addresses belong to the
/// port adapters and process wiring; only the token lifetime and the hashing
/// concurrency bound are domain-visible.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Issued-token time-to-live in seconds
    pub token_ttl_secs: i64,
    /// Maximum password-hashing operations in flight at once
    pub max_concurrent_hashes: usize,
}

impl AuthConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            token_ttl_secs: env::var("AUTH_TOKEN_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            max_concurrent_hashes: env::var("AUTH_MAX_CONCURRENT_HASHES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4),
        }
    }

    /// Token time-to-live as a duration.
    pub fn token_ttl(&self) -> Duration {
        Duration::seconds(self.token_ttl_secs)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl_secs: 3600,
            max_concurrent_hashes: 4,
        }
    }
}
