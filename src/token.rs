//! Token Bootstrap
//!
//! Requests a music service token once per map mount. The map does not
//! wait on it; the outcome is logged and kept in a signal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::console::{log_info, log_warn, TOKEN};
use crate::models::TokenGrant;

/// Host log lines echoed after a failed token request
const HOST_LOG_TAIL: usize = 5;

pub fn bootstrap_token() -> ReadSignal<Option<Result<TokenGrant, String>>> {
    let (outcome, set_outcome) = signal(None);

    spawn_local(async move {
        let result = commands::issue_music_token().await;
        match &result {
            Ok(grant) => log_info(
                TOKEN,
                &format!("token issued ({}, expires in {}s)", grant.token_type, grant.expires_in),
            ),
            Err(e) => {
                log_warn(TOKEN, &format!("token request failed: {}", e));
                // Surface the host side of the failure in the webview console
                if let Ok(lines) = commands::get_recent_logs(HOST_LOG_TAIL).await {
                    for line in lines {
                        log_warn(TOKEN, &format!("host: {}", line));
                    }
                }
            }
        }
        let _ = set_outcome.try_set(Some(result));
    });

    outcome
}
