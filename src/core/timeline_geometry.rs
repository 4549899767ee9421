//! Timeline coordinate model and pointer hit-testing.
//!
//! The canvas is sized to the whole timeline (`total_width`) and translated by
//! `-scroll_offset`, so drawing works in content space and pointer events only
//! need the scroll offset added back.

use crate::constants::{
    TIMELINE_BASE_PX_PER_SECOND, TIMELINE_LANE_MARGIN, TIMELINE_MAX_ZOOM, TIMELINE_MIN_ZOOM,
    TIMELINE_RULER_HEIGHT,
};
use crate::state::Subtitle;

/// Axis-aligned rectangle in content-space pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Zoom, pan and layout of the timeline pane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimelineView {
    /// Multiplier on the base pixels-per-second density.
    pub zoom: f64,
    /// Horizontal pan in pixels.
    pub scroll_offset: f64,
    pub viewport_width: f64,
    /// Full canvas height, ruler included.
    pub height: f64,
    /// Timeline length in seconds.
    pub duration: f64,
    pub lane_count: usize,
}

/// Outcome of a pointer click on the timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineHit {
    /// Clicked time; always propagated as a seek.
    pub time: f64,
    /// Lane under the pointer, if the pointer is inside one.
    pub lane: Option<usize>,
    /// Lane to make active (double-click inside a lane).
    pub activate_lane: Option<usize>,
    /// Subtitle to select; `None` clears the selection.
    pub selection: Option<String>,
}

pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() {
        zoom.clamp(TIMELINE_MIN_ZOOM, TIMELINE_MAX_ZOOM)
    } else {
        1.0
    }
}

impl TimelineView {
    pub fn pixels_per_second(&self) -> f64 {
        TIMELINE_BASE_PX_PER_SECOND * clamp_zoom(self.zoom)
    }

    pub fn total_width(&self) -> f64 {
        self.duration.max(0.0) * self.pixels_per_second()
    }

    pub fn time_to_pixel(&self, time: f64) -> f64 {
        time * self.pixels_per_second()
    }

    pub fn pixel_to_time(&self, x: f64) -> f64 {
        x / self.pixels_per_second()
    }

    pub fn max_scroll(&self) -> f64 {
        (self.total_width() - self.viewport_width.max(0.0)).max(0.0)
    }

    pub fn clamp_scroll(&self, offset: f64) -> f64 {
        if !offset.is_finite() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll())
    }

    /// Change zoom without re-centering; the offset is only re-clamped.
    pub fn with_zoom(self, zoom: f64) -> Self {
        let mut next = Self { zoom: clamp_zoom(zoom), ..self };
        next.scroll_offset = next.clamp_scroll(next.scroll_offset);
        next
    }

    pub fn with_scroll(self, offset: f64) -> Self {
        Self { scroll_offset: self.clamp_scroll(offset), ..self }
    }

    pub fn lane_height(&self) -> f64 {
        let lanes = self.lane_count.max(1) as f64;
        ((self.height - TIMELINE_RULER_HEIGHT) / lanes).max(0.0)
    }

    /// Lane index under content-space `y`, or `None` over the ruler / below
    /// the last lane.
    pub fn lane_at(&self, y: f64) -> Option<usize> {
        let lane_height = self.lane_height();
        if lane_height <= 0.0 || !y.is_finite() {
            return None;
        }
        let index = ((y - TIMELINE_RULER_HEIGHT) / lane_height).floor();
        if index < 0.0 || index >= self.lane_count as f64 {
            return None;
        }
        Some(index as usize)
    }

    /// Full band of `lane` as `(top, height)`.
    pub fn lane_band(&self, lane: usize) -> (f64, f64) {
        let lane_height = self.lane_height();
        (TIMELINE_RULER_HEIGHT + lane as f64 * lane_height, lane_height)
    }

    /// Block rectangle of a subtitle, inset inside its lane band.
    pub fn subtitle_rect(&self, subtitle: &Subtitle) -> Rect {
        let (top, lane_height) = self.lane_band(subtitle.layer);
        let margin = TIMELINE_LANE_MARGIN.min(lane_height / 2.0);
        Rect {
            x: self.time_to_pixel(subtitle.start_time),
            y: top + margin,
            width: self.time_to_pixel(subtitle.duration()),
            height: (lane_height - 2.0 * margin).max(0.0),
        }
    }
}

/// Resolve a click at viewport-relative `(x, y)`.
///
/// Overlapping matches resolve to the first subtitle in list order.
pub fn hit_test(
    view: &TimelineView,
    subtitles: &[Subtitle],
    x: f64,
    y: f64,
    click_count: u32,
) -> TimelineHit {
    let content_x = x + view.scroll_offset;
    let time = view.pixel_to_time(content_x);
    let lane = view.lane_at(y);
    let activate_lane = lane.filter(|_| click_count >= 2);
    let selection = lane.and_then(|lane| {
        subtitles
            .iter()
            .find(|s| s.layer == lane && s.contains(time))
            .map(|s| s.id.clone())
    });
    TimelineHit {
        time,
        lane,
        activate_lane,
        selection,
    }
}
