mod api;
mod app;
mod board;
mod components;
mod context;
mod error;
mod models;
mod richtext;
mod saga;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("failed to install logger");
    mount_to_body(App);
}
