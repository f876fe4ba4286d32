//! Token Entity
//!
//! Access tokens issued by the music service, and how long we trust them.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// A bearer token as returned by the accounts service (and sent to the frontend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    pub token_type: String,
    /// Lifetime in seconds from the moment it was issued
    pub expires_in: u64,
}

/// A grant plus the instant it was received
#[derive(Debug, Clone)]
pub struct CachedGrant {
    pub grant: TokenGrant,
    pub received_at: Instant,
}

impl CachedGrant {
    pub fn new(grant: TokenGrant, received_at: Instant) -> Self {
        Self { grant, received_at }
    }

    pub fn expires_at(&self) -> Instant {
        self.received_at + Duration::from_secs(self.grant.expires_in)
    }

    /// Still usable for at least `margin` after `now`
    pub fn is_fresh(&self, now: Instant, margin: Duration) -> bool {
        now + margin < self.expires_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grant(expires_in: u64) -> TokenGrant {
        TokenGrant {
            access_token: "abc".to_string(),
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }

    #[test]
    fn test_grant_deserializes_accounts_response() {
        let body = r#"{"access_token":"NgCXRK...MzYjw","token_type":"Bearer","expires_in":3600}"#;
        let parsed: TokenGrant = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.token_type, "Bearer");
        assert_eq!(parsed.expires_in, 3600);
    }

    #[test]
    fn test_fresh_within_lifetime() {
        let now = Instant::now();
        let cached = CachedGrant::new(grant(3600), now);
        assert!(cached.is_fresh(now, Duration::from_secs(60)));
        assert!(cached.is_fresh(now + Duration::from_secs(3000), Duration::from_secs(60)));
    }

    #[test]
    fn test_stale_inside_margin() {
        let now = Instant::now();
        let cached = CachedGrant::new(grant(3600), now);
        assert!(!cached.is_fresh(now + Duration::from_secs(3540), Duration::from_secs(60)));
        assert!(!cached.is_fresh(now + Duration::from_secs(4000), Duration::from_secs(60)));
    }

    #[test]
    fn test_short_lived_grant_never_fresh() {
        let now = Instant::now();
        let cached = CachedGrant::new(grant(30), now);
        assert!(!cached.is_fresh(now, Duration::from_secs(60)));
    }
}
