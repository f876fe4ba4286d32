//! Token Commands
//!
//! Tauri command issuing music service tokens to the map widget.

use tauri::State;

use crate::domain::TokenGrant;
use crate::AppState;

/// Issue (or reuse) an access token for the music service
#[tauri::command]
pub async fn issue_music_token(state: State<'_, AppState>) -> Result<TokenGrant, String> {
    state.tokens.get().await.map_err(|e| {
        let _ = rolling_logger::error(&format!("issue_music_token failed: {}", e));
        e.to_string()
    })
}
