//! Token Cache
//!
//! Serves a still-valid grant from memory and only asks the provider when
//! it is missing or about to expire.

use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use super::traits::TokenProvider;
use crate::domain::{CachedGrant, TokenGrant, TokenResult};

/// Grants expiring within this window are refreshed
pub const REFRESH_MARGIN: Duration = Duration::from_secs(60);

pub struct TokenCache<P: TokenProvider> {
    provider: P,
    slot: Mutex<Option<CachedGrant>>,
}

impl<P: TokenProvider> TokenCache<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            slot: Mutex::new(None),
        }
    }

    /// Cached grant if fresh, otherwise a new one from the provider.
    ///
    /// The lock is held across the fetch so concurrent callers share one request.
    pub async fn get(&self) -> TokenResult<TokenGrant> {
        let mut slot = self.slot.lock().await;
        if let Some(cached) = slot.as_ref() {
            if cached.is_fresh(Instant::now(), REFRESH_MARGIN) {
                return Ok(cached.grant.clone());
            }
        }

        let grant = self.provider.fetch().await?;
        log::info!("music token issued, expires in {}s", grant.expires_in);
        *slot = Some(CachedGrant::new(grant.clone(), Instant::now()));
        Ok(grant)
    }
}
