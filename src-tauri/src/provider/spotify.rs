//! Spotify Accounts Provider
//!
//! OAuth2 client-credentials flow against the accounts service.

use async_trait::async_trait;
use base64::Engine;
use reqwest::header::AUTHORIZATION;

use super::traits::TokenProvider;
use crate::config::TokenConfig;
use crate::domain::{TokenError, TokenGrant, TokenResult};

pub struct SpotifyTokenProvider {
    http: reqwest::Client,
    config: TokenConfig,
}

impl SpotifyTokenProvider {
    pub fn new(http: reqwest::Client, config: TokenConfig) -> Self {
        Self { http, config }
    }
}

/// `Authorization` header value for client credentials
pub fn basic_auth(client_id: &str, client_secret: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD
        .encode(format!("{}:{}", client_id, client_secret));
    format!("Basic {}", encoded)
}

#[async_trait]
impl TokenProvider for SpotifyTokenProvider {
    async fn fetch(&self) -> TokenResult<TokenGrant> {
        let (client_id, client_secret) = self
            .config
            .credentials()
            .ok_or(TokenError::MissingCredentials)?;

        let response = self
            .http
            .post(&self.config.token_url)
            .header(AUTHORIZATION, basic_auth(client_id, client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| TokenError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TokenError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<TokenGrant>()
            .await
            .map_err(|e| TokenError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_header() {
        // base64("id:secret")
        assert_eq!(basic_auth("id", "secret"), "Basic aWQ6c2VjcmV0");
    }

    #[tokio::test]
    async fn test_fetch_without_credentials() {
        let config = TokenConfig::from_lookup(|_| None);
        let provider = SpotifyTokenProvider::new(reqwest::Client::new(), config);
        assert_eq!(provider.fetch().await, Err(TokenError::MissingCredentials));
    }
}
