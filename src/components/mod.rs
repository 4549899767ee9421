//! UI components grouped by pane.
pub mod common;

mod playback_controls;
mod status_bar;
mod title_bar;
mod transcription_editor;
mod video_player;

pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
pub use transcription_editor::TranscriptionEditor;
pub use video_player::{use_player_bridge, PlayerBridge, VideoPlayer};
