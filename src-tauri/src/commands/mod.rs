//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod log_cmd;
mod token_cmd;

pub use log_cmd::*;
pub use token_cmd::*;
