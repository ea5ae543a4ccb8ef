#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;
use std::sync::Arc;

use log::info;

use platform_logos::config::ViewerConfig;
use platform_logos::state::State;
use platform_logos::StaticLogoProvider;

pub fn main() -> iced::Result {
    // Optional path to a JSON config file
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = ViewerConfig::load_or_default(config_path.as_deref());
    let window_size = config.window_size;

    info!("Starting platform logo viewer with {} presets", config.presets.len());

    iced::application("Platform Logos", State::update, State::view)
        .theme(State::theme)
        .window_size(window_size)
        .run_with(move || (State::new(config, Arc::new(StaticLogoProvider)), iced::Task::none()))
}
