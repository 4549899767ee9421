//! Startup configuration.
//!
//! Read from the JSON file named by `SUBTITLE_EDITOR_CONFIG`, falling back to
//! `subtitle_editor.json` in the working directory. Every field is optional.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_LANE_COUNT, MAX_LANE_COUNT};
use crate::error::{EditorError, EditorResult};

pub const CONFIG_ENV_VAR: &str = "SUBTITLE_EDITOR_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "subtitle_editor.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Video opened at startup.
    pub media_path: Option<PathBuf>,
    /// Number of timeline lanes.
    pub lane_count: usize,
    pub window_width: f64,
    pub window_height: f64,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            media_path: None,
            lane_count: DEFAULT_LANE_COUNT,
            window_width: 1280.0,
            window_height: 800.0,
            log_filter: "subtitle_editor=info".to_string(),
        }
    }
}

impl EditorConfig {
    /// Parse a config document and normalize out-of-range values.
    pub fn from_json(json: &str) -> EditorResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.normalized()
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> EditorResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Resolve the config location from the environment and load it.
    pub fn load() -> EditorResult<Self> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&path)
    }

    /// Apply a media path given on the command line.
    pub fn with_media_override(mut self, media: Option<PathBuf>) -> Self {
        if media.is_some() {
            self.media_path = media;
        }
        self
    }

    fn normalized(mut self) -> EditorResult<Self> {
        self.lane_count = self.lane_count.clamp(1, MAX_LANE_COUNT);
        if !(self.window_width.is_finite() && self.window_width > 0.0)
            || !(self.window_height.is_finite() && self.window_height > 0.0)
        {
            return Err(EditorError::Config(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = EditorConfig::from_json("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.lane_count, 4);
    }

    #[test]
    fn test_lane_count_is_clamped() {
        let config = EditorConfig::from_json(r#"{ "lane_count": 0 }"#).unwrap();
        assert_eq!(config.lane_count, 1);
        let config = EditorConfig::from_json(r#"{ "lane_count": 64 }"#).unwrap();
        assert_eq!(config.lane_count, MAX_LANE_COUNT);
    }

    #[test]
    fn test_bad_window_size_rejected() {
        let result = EditorConfig::from_json(r#"{ "window_width": -5 }"#);
        assert!(matches!(result, Err(EditorError::Config(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = EditorConfig::from_json("{ lane_count: ");
        assert!(matches!(result, Err(EditorError::Json(_))));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EditorConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{ "media_path": "clip.mp4", "lane_count": 2 }}"#).unwrap();
        let config = EditorConfig::load_from(&path).unwrap();
        assert_eq!(config.media_path, Some(PathBuf::from("clip.mp4")));
        assert_eq!(config.lane_count, 2);
    }

    #[test]
    fn test_media_override() {
        let config = EditorConfig::default()
            .with_media_override(Some(PathBuf::from("a.mp4")))
            .with_media_override(None);
        assert_eq!(config.media_path, Some(PathBuf::from("a.mp4")));
    }
}
