//! Log Commands

/// Most recent host log lines, oldest first
#[tauri::command]
pub fn get_recent_logs(count: Option<usize>) -> Vec<String> {
    rolling_logger::recent_lines(count.unwrap_or(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_logs_empty_without_logger() {
        assert!(get_recent_logs(Some(5)).is_empty());
        assert!(get_recent_logs(None).is_empty());
    }
}
