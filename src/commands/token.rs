//! Token Commands
//!
//! Frontend binding for the music service token command.

use wasm_bindgen::JsValue;

use super::{invoke, rejection};
use crate::models::TokenGrant;

pub async fn issue_music_token() -> Result<TokenGrant, String> {
    let result = invoke("issue_music_token", JsValue::NULL)
        .await
        .map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
