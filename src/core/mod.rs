//! Editor logic independent of the UI: playback sync, timeline geometry and
//! rendering, scrollbar math, and local media serving.

pub mod media_protocol;
pub mod playback;
pub mod scrollbar;
pub mod timeline_geometry;
pub mod timeline_render;
