//! Host Configuration
//!
//! Music service credentials, read from the process environment.

use std::env;

pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Client-credentials settings for the accounts service
#[derive(Debug, Clone, PartialEq)]
pub struct TokenConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub token_url: String,
}

impl TokenConfig {
    /// Read `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET` and `SPOTIFY_TOKEN_URL`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as missing
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            client_id: non_blank("SPOTIFY_CLIENT_ID"),
            client_secret: non_blank("SPOTIFY_CLIENT_SECRET"),
            token_url: non_blank("SPOTIFY_TOKEN_URL")
                .unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
        }
    }

    /// `(client_id, client_secret)` when both are set
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => Some((id.as_str(), secret.as_str())),
            _ => None,
        }
    }
}
