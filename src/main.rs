//! Music Pin Map Frontend Entry Point

mod models;
mod commands;
mod config;
mod console;
mod context;
mod store;
mod overlay;
mod kakao;
mod tracker;
mod token;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
