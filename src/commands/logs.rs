//! Log Commands
//!
//! Frontend binding for the host log tail.

use serde::Serialize;

use super::{invoke, rejection};

#[derive(Serialize)]
struct RecentLogsArgs {
    count: Option<usize>,
}

pub async fn get_recent_logs(count: usize) -> Result<Vec<String>, String> {
    let args = serde_wasm_bindgen::to_value(&RecentLogsArgs { count: Some(count) })
        .map_err(|e| e.to_string())?;
    let result = invoke("get_recent_logs", args).await.map_err(rejection)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
