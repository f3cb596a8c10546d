//! Movie Cards - a movie catalog browser
//! Built with iced: search, filter and add movie cards

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod i18n;
mod ui;

use std::path::PathBuf;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    // Optional catalog file as the first argument
    let cli_catalog = std::env::args_os().nth(1).map(PathBuf::from);

    iced::application(
        move || app::App::new(cli_catalog.clone()),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .theme(app::App::theme)
    .subscription(app::App::subscription)
    .window_size(iced::Size::new(1280.0, 820.0))
    .antialiasing(true)
    .run()
}
