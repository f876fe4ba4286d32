//! Music Pin Map Backend
//!
//! Layered architecture:
//! - domain: Token entities and errors
//! - provider: Token sources and the in-memory cache
//! - commands: Tauri command handlers

use tauri::Manager;

mod commands;
mod config;
mod domain;
mod provider;

use config::TokenConfig;
use provider::{SpotifyTokenProvider, TokenCache};

/// Application state shared across commands
pub struct AppState {
    pub tokens: TokenCache<SpotifyTokenProvider>,
}

impl AppState {
    pub fn new(config: TokenConfig) -> Self {
        let provider = SpotifyTokenProvider::new(reqwest::Client::new(), config);
        Self {
            tokens: TokenCache::new(provider),
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                // Focus the existing window when a new instance tries to start
                if let Some(window) = _app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            // Initialize logging
            let log_dir = app.path().app_log_dir()?;
            rolling_logger::init_logger(log_dir, "MusicPinMap")?;

            let config = TokenConfig::from_env();
            if config.credentials().is_none() {
                let _ = rolling_logger::warn(
                    "SPOTIFY_CLIENT_ID / SPOTIFY_CLIENT_SECRET not set; token requests will fail",
                );
            }
            let _ = rolling_logger::info(&format!("App setup, token endpoint {}", config.token_url));

            app.manage(AppState::new(config));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::issue_music_token,
            commands::get_recent_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
