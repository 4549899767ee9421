//! Horizontal scrollbar math: thumb sizing, drag and track-click mapping.

use crate::constants::SCROLLBAR_MIN_THUMB_PX;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollbarGeometry {
    pub content_width: f64,
    pub viewport_width: f64,
}

impl ScrollbarGeometry {
    pub fn new(content_width: f64, viewport_width: f64) -> Self {
        Self {
            content_width: sanitize(content_width),
            viewport_width: sanitize(viewport_width),
        }
    }

    pub fn max_scroll(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    pub fn is_scrollable(&self) -> bool {
        self.max_scroll() > 0.0
    }

    /// Proportional to the visible fraction, never narrower than the minimum
    /// and never wider than the track.
    pub fn thumb_width(&self) -> f64 {
        if !self.is_scrollable() {
            return self.viewport_width;
        }
        let proportional = self.viewport_width / self.content_width * self.viewport_width;
        proportional.max(SCROLLBAR_MIN_THUMB_PX).min(self.viewport_width)
    }

    /// Thumb position along the track for a scroll offset.
    pub fn thumb_offset(&self, scroll: f64) -> f64 {
        let max_scroll = self.max_scroll();
        if max_scroll <= 0.0 {
            return 0.0;
        }
        self.clamp(scroll) / max_scroll * (self.viewport_width - self.thumb_width())
    }

    /// Scroll offset after dragging the thumb by `delta_x` pixels from a drag
    /// that started at `start_scroll`.
    pub fn drag_to(&self, start_scroll: f64, delta_x: f64) -> f64 {
        if self.viewport_width <= 0.0 {
            return self.clamp(start_scroll);
        }
        self.clamp(start_scroll + delta_x / self.viewport_width * self.content_width)
    }

    /// Scroll offset for a click at `click_x` on the track.
    pub fn track_click(&self, click_x: f64) -> f64 {
        if self.viewport_width <= 0.0 {
            return 0.0;
        }
        self.clamp(click_x / self.viewport_width * self.max_scroll())
    }

    pub fn clamp(&self, scroll: f64) -> f64 {
        if !scroll.is_finite() {
            return 0.0;
        }
        scroll.clamp(0.0, self.max_scroll())
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Active thumb drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbDrag {
    pub start_x: f64,
    pub start_scroll: f64,
}

impl ThumbDrag {
    pub fn scroll_for(&self, geometry: &ScrollbarGeometry, pointer_x: f64) -> f64 {
        geometry.drag_to(self.start_scroll, pointer_x - self.start_x)
    }
}
