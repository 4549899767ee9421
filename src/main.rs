//! Subtitle Editor
//!
//! A desktop editor for timing and writing subtitles against a local video.

mod app;
mod components;
mod config;
mod constants;
mod core;
mod error;
mod hotkeys;
mod state;
mod timeline;
mod utils;

use std::path::PathBuf;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::config::EditorConfig;
use crate::core::media_protocol::{self, MEDIA_PROTOCOL};

fn main() {
    let (editor_config, config_error) = match EditorConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (EditorConfig::default(), Some(err)),
    };
    let editor_config = editor_config.with_media_override(std::env::args_os().nth(1).map(PathBuf::from));

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&editor_config.log_filter)),
        )
        .init();

    if let Some(err) = config_error {
        tracing::warn!(%err, "failed to load config, using defaults");
    }
    tracing::info!(
        lanes = editor_config.lane_count,
        media = ?editor_config.media_path,
        "starting subtitle editor"
    );

    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Subtitle Editor")
                .with_inner_size(LogicalSize::new(
                    editor_config.window_width,
                    editor_config.window_height,
                ))
                .with_resizable(true),
        )
        .with_menu(None) // Disable default menu bar
        .with_custom_protocol(MEDIA_PROTOCOL, |_webview, request| media_protocol::serve(&request));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(editor_config)
        .launch(app::App);
}
