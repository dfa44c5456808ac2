mod app;
mod components;
mod error;
mod layout;
mod menu;
mod pages;
mod render;
mod submenu;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
