//! State management module
//!
//! This module contains the core data structures for the editor:
//! - Subtitle: A timed caption on one lane
//! - SelectionState: The selected subtitle
//! - EditorState: Cursor, duration, subtitles, selection and active lane

mod subtitle;
mod selection;
mod editor;

pub use subtitle::*;
pub use selection::*;
pub use editor::*;
