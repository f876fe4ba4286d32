//! Provider Layer - Core Traits
//!
//! Abstract source of music service tokens.
//! Implementations can hit the network, return fixtures, etc.

use async_trait::async_trait;
use crate::domain::{TokenGrant, TokenResult};

/// Something that can issue a fresh access token
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Request a new grant (no caching)
    async fn fetch(&self) -> TokenResult<TokenGrant>;
}
