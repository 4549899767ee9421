//! Builds the draw list for the timeline canvas.
//!
//! The canvas only covers the viewport. Commands are in viewport
//! coordinates (content x minus the scroll offset) and anything outside the
//! visible window is culled, so the backing store never grows with the
//! timeline length.

use serde::Serialize;

use crate::constants::{
    ACTIVE_LANE_TINT, BG_BASE, BG_SURFACE, BORDER_STRONG, LANE_DIVIDER, PLAYHEAD_COLOR,
    PLAYHEAD_WIDTH, SUBTITLE_SELECTED, SUBTITLE_UNSELECTED, TEXT_DIM,
    TIMELINE_LABEL_INTERVAL_SECONDS, TIMELINE_RULER_HEIGHT,
};
use crate::core::playback::format_ruler_label;
use crate::core::timeline_geometry::TimelineView;
use crate::state::Subtitle;

const MINOR_TICK_HEIGHT: f64 = 6.0;
const MAJOR_TICK_HEIGHT: f64 = 14.0;
/// Room reserved for a `mm:ss` label to the right of its tick.
const LABEL_WIDTH: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: &'static str,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        color: &'static str,
    },
}

impl DrawCommand {
    fn rect(x: f64, y: f64, width: f64, height: f64, color: &'static str) -> Self {
        DrawCommand::Rect { x, y, width, height, color }
    }
}

/// Message consumed by the timeline canvas script.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineScene {
    /// Canvas width, equal to the viewport width.
    pub width: f64,
    pub height: f64,
    pub commands: Vec<DrawCommand>,
}

/// Collects commands, dropping rects that fall entirely outside `[0, width]`.
struct SceneBuilder {
    width: f64,
    commands: Vec<DrawCommand>,
}

impl SceneBuilder {
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &'static str) {
        if x + width > 0.0 && x < self.width {
            self.commands.push(DrawCommand::rect(x, y, width, height, color));
        }
    }
}

pub fn build_scene(
    view: &TimelineView,
    subtitles: &[Subtitle],
    selected_id: Option<&str>,
    current_time: f64,
    active_layer: usize,
) -> TimelineScene {
    let width = view.viewport_width.max(0.0);
    let height = view.height.max(0.0);
    let scroll = view.clamp_scroll(view.scroll_offset);
    // Part of the viewport that shows timeline content.
    let content_width = (view.total_width() - scroll).clamp(0.0, width);
    let mut scene = SceneBuilder { width, commands: Vec::new() };

    scene.rect(0.0, 0.0, content_width, height, BG_BASE);
    scene.rect(0.0, 0.0, content_width, TIMELINE_RULER_HEIGHT, BG_SURFACE);

    if active_layer < view.lane_count {
        let (top, lane_height) = view.lane_band(active_layer);
        scene.rect(0.0, top, content_width, lane_height, ACTIVE_LANE_TINT);
    }
    for lane in 1..view.lane_count {
        let (top, _) = view.lane_band(lane);
        scene.rect(0.0, top, content_width, 1.0, LANE_DIVIDER);
    }

    push_ruler(view, scroll, &mut scene);

    for subtitle in subtitles {
        if subtitle.layer >= view.lane_count {
            continue;
        }
        let rect = view.subtitle_rect(subtitle);
        let color = if selected_id == Some(subtitle.id.as_str()) {
            SUBTITLE_SELECTED
        } else {
            SUBTITLE_UNSELECTED
        };
        scene.rect(rect.x - scroll, rect.y, rect.width, rect.height, color);
    }

    // Playhead goes last so it overlays every block.
    scene.rect(
        view.time_to_pixel(current_time) - scroll,
        0.0,
        PLAYHEAD_WIDTH,
        height,
        PLAYHEAD_COLOR,
    );

    TimelineScene {
        width,
        height,
        commands: scene.commands,
    }
}

/// One tick per whole second; every fifth is taller and labeled `mm:ss`.
/// Only seconds whose tick or label reaches into the viewport are emitted.
fn push_ruler(view: &TimelineView, scroll: f64, scene: &mut SceneBuilder) {
    let pps = view.pixels_per_second();
    let last_second = view.duration.max(0.0).floor();
    let first = ((scroll - LABEL_WIDTH) / pps).floor().max(0.0) as u64;
    let last = ((scroll + scene.width) / pps).floor().min(last_second).max(0.0) as u64;
    for second in first..=last {
        let x = view.time_to_pixel(second as f64) - scroll;
        let major = second % TIMELINE_LABEL_INTERVAL_SECONDS == 0;
        let tick_height = if major { MAJOR_TICK_HEIGHT } else { MINOR_TICK_HEIGHT };
        scene.rect(x, TIMELINE_RULER_HEIGHT - tick_height, 1.0, tick_height, BORDER_STRONG);
        if major && x + 3.0 + LABEL_WIDTH > 0.0 && x + 3.0 < scene.width {
            scene.commands.push(DrawCommand::Text {
                x: x + 3.0,
                y: 3.0,
                text: format_ruler_label(second),
                color: TEXT_DIM,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> TimelineView {
        TimelineView {
            zoom: 1.0,
            scroll_offset: 0.0,
            viewport_width: 400.0,
            height: 190.0,
            duration: 12.5,
            lane_count: 4,
        }
    }

    fn sub(id: &str, start: f64, end: f64, layer: usize) -> Subtitle {
        Subtitle {
            id: id.into(),
            start_time: start,
            end_time: end,
            text: String::new(),
            layer,
        }
    }

    fn rects_with(scene: &TimelineScene, color: &str) -> Vec<(f64, f64, f64, f64)> {
        scene
            .commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Rect { x, y, width, height, color: c } if *c == color => {
                    Some((*x, *y, *width, *height))
                }
                _ => None,
            })
            .collect()
    }

    fn labels(scene: &TimelineScene) -> Vec<&str> {
        scene
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_scene_matches_viewport() {
        let scene = build_scene(&view(), &[], None, 0.0, 0);
        assert_eq!(scene.width, 400.0);
        assert_eq!(scene.height, 190.0);
    }

    #[test]
    fn test_ruler_ticks_and_labels() {
        // 25 px per second: the whole 12.5 s fits in the viewport.
        let view = view().with_zoom(0.25);
        let scene = build_scene(&view, &[], None, 0.0, 0);
        let ticks = rects_with(&scene, BORDER_STRONG);
        assert_eq!(ticks.len(), 13);
        assert_eq!(labels(&scene), vec!["00:00", "00:05", "00:10"]);
        assert_eq!(ticks[5].3, MAJOR_TICK_HEIGHT);
        assert_eq!(ticks[6].3, MINOR_TICK_HEIGHT);
    }

    #[test]
    fn test_subtitle_palette_and_placement() {
        let subs = vec![sub("a", 1.0, 2.0, 0), sub("b", 3.0, 4.0, 2)];
        let scene = build_scene(&view(), &subs, Some("b"), 0.0, 0);
        assert_eq!(rects_with(&scene, SUBTITLE_UNSELECTED), vec![(100.0, 34.0, 100.0, 32.0)]);
        assert_eq!(rects_with(&scene, SUBTITLE_SELECTED), vec![(300.0, 114.0, 100.0, 32.0)]);
    }

    #[test]
    fn test_playhead_drawn_last() {
        let subs = vec![sub("a", 1.0, 2.0, 0)];
        let scene = build_scene(&view(), &subs, None, 1.5, 0);
        assert_eq!(
            scene.commands.last(),
            Some(&DrawCommand::Rect {
                x: 150.0,
                y: 0.0,
                width: PLAYHEAD_WIDTH,
                height: 190.0,
                color: PLAYHEAD_COLOR,
            })
        );
    }

    #[test]
    fn test_active_lane_tinted() {
        let scene = build_scene(&view(), &[], None, 0.0, 3);
        assert_eq!(rects_with(&scene, ACTIVE_LANE_TINT), vec![(0.0, 150.0, 400.0, 40.0)]);
    }

    #[test]
    fn test_scrolled_scene_is_translated_and_culled() {
        let view = view().with_scroll(450.0);
        let subs = vec![sub("early", 1.0, 2.0, 0), sub("late", 6.0, 7.0, 0)];
        let scene = build_scene(&view, &subs, None, 5.0, 0);

        assert_eq!(rects_with(&scene, SUBTITLE_UNSELECTED), vec![(150.0, 34.0, 100.0, 32.0)]);
        assert_eq!(labels(&scene), vec!["00:05"]);
        assert_eq!(
            scene.commands.last(),
            Some(&DrawCommand::Rect {
                x: 50.0,
                y: 0.0,
                width: PLAYHEAD_WIDTH,
                height: 190.0,
                color: PLAYHEAD_COLOR,
            })
        );
    }

    #[test]
    fn test_long_timeline_stays_viewport_sized() {
        let view = TimelineView {
            zoom: 5.0,
            scroll_offset: 150_000.0,
            viewport_width: 800.0,
            height: 190.0,
            duration: 3600.0,
            lane_count: 4,
        };
        let subs = vec![sub("a", 300.5, 301.0, 1), sub("b", 10.0, 12.0, 1)];
        let scene = build_scene(&view, &subs, None, 0.0, 0);

        assert!(view.total_width() > 32_767.0);
        assert!(scene.width <= view.viewport_width);
        assert!(scene.commands.len() < 100);
        for cmd in &scene.commands {
            if let DrawCommand::Rect { x, width, .. } = cmd {
                assert!(*x + *width > 0.0 && *x < scene.width, "rect at {x} outside canvas");
            }
        }
        assert_eq!(rects_with(&scene, SUBTITLE_UNSELECTED), vec![(250.0, 74.0, 250.0, 32.0)]);
        assert_eq!(labels(&scene), vec!["05:00"]);
    }

    #[test]
    fn test_scene_serializes_for_canvas() {
        let scene = build_scene(&view(), &[], None, 0.0, 0);
        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["commands"][0]["kind"], "rect");
        assert_eq!(json["width"], 400.0);
    }
}
