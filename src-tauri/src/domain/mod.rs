//! Domain Layer
//!
//! Token entities and errors.
//! This layer has NO external dependencies (except serde for serialization).

mod error;
mod token;

pub use error::{TokenError, TokenResult};
pub use token::{CachedGrant, TokenGrant};
