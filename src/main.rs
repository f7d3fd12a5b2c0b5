//! Social Wiki Frontend Entry Point

mod api;
mod app;
mod components;
mod dialogs;
mod fetch;
mod markdown;
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
