//! Error types for editor commands and startup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    /// Subtitle bounds must satisfy `0 <= start < end`.
    #[error("invalid subtitle bounds: start {start}, end {end}")]
    InvalidBounds { start: f64, end: f64 },

    #[error("no subtitle with id {0}")]
    UnknownSubtitle(String),

    #[error("lane {lane} is out of range (lane count {lane_count})")]
    LaneOutOfRange { lane: usize, lane_count: usize },

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type EditorResult<T> = Result<T, EditorError>;
