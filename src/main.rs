//! Video Creator
//!
//! A mock-up of a mobile video-creation app: home screen, project list,
//! landscape editor with draggable overlay buttons, and a preview mode gated
//! by audio-permission and disclaimer dialogs.

mod app;
mod components;
mod config;
mod constants;
mod core;
mod error;
mod hotkeys;
mod state;
mod utils;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use crate::config::AppConfig;
use crate::core::asset_protocol::{self, ASSET_PROTOCOL};
use crate::state::Orientation;

fn main() {
    // Initialize logging
    env_logger::init();

    let app_config = AppConfig::load();
    let (width, height) =
        Orientation::Portrait.window_size(app_config.window.width, app_config.window.height);
    log::info!("starting {} ({}x{})", app_config.window.title, width, height);

    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title(app_config.window.title.clone())
                .with_inner_size(LogicalSize::new(width, height))
                .with_resizable(true),
        )
        .with_menu(None) // Disable default menu bar
        .with_custom_protocol(ASSET_PROTOCOL, |_webview_id, request| {
            asset_protocol::handle_asset_request(&request)
        });

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(app_config)
        .launch(app::App);
}
