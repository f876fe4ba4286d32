//! Domain Layer - Errors

use serde::{Deserialize, Serialize};

/// Common result type for token operations
pub type TokenResult<T> = Result<T, TokenError>;

/// Token-fetch errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenError {
    /// Client id or secret not configured
    MissingCredentials,
    /// Request never got a response
    Http(String),
    /// Accounts service answered with a non-success status
    Rejected { status: u16, body: String },
    /// Response body was not a token grant
    InvalidResponse(String),
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::MissingCredentials => {
                write!(f, "Music service credentials are not configured")
            }
            TokenError::Http(msg) => write!(f, "Token request failed: {}", msg),
            TokenError::Rejected { status, body } => {
                write!(f, "Token request rejected ({}): {}", status, body)
            }
            TokenError::InvalidResponse(msg) => write!(f, "Invalid token response: {}", msg),
        }
    }
}

impl std::error::Error for TokenError {}
