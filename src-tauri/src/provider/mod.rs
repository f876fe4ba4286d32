//! Provider Layer
//!
//! Token source abstractions and implementations.

mod traits;
mod spotify;
mod cache;

pub use traits::TokenProvider;
pub use spotify::SpotifyTokenProvider;
pub use cache::TokenCache;
