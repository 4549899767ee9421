//! Timeline module
//!
//! - WaveformEditor: Canvas timeline with ruler, lanes, subtitle blocks and playhead
//! - Scrollbar: Horizontal pan control for zoomed timelines

mod panel;
mod scrollbar;

pub use panel::WaveformEditor;
