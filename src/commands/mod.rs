//! Tauri Command Wrappers
//!
//! Frontend bindings to host commands, organized by domain.

mod logs;
mod token;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Message of a rejected command (or of a missing Tauri bridge)
fn rejection(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

pub use logs::*;
pub use token::*;
