//! Console Logging
//!
//! Thin wrappers over the browser console with a `[TAG]` prefix per area.

pub const MAP: &str = "MAP";
pub const GEO: &str = "GEO";
pub const PIN: &str = "PIN";
pub const TOKEN: &str = "TOKEN";

fn line(tag: &str, msg: &str) -> String {
    format!("[{}] {}", tag, msg)
}

pub fn log_info(tag: &str, msg: &str) {
    web_sys::console::log_1(&line(tag, msg).into());
}

pub fn log_warn(tag: &str, msg: &str) {
    web_sys::console::warn_1(&line(tag, msg).into());
}

pub fn log_error(tag: &str, msg: &str) {
    web_sys::console::error_1(&line(tag, msg).into());
}
