use dioxus::prelude::*;
use crate::constants::*;
use crate::core::playback::format_timestamp;

#[component]
pub fn StatusBar(
    current_time: f64,
    duration: f64,
    subtitle_count: usize,
    active_layer: usize,
    lane_count: usize,
) -> Element {
    let subtitles_label = match subtitle_count {
        1 => "1 subtitle".to_string(),
        n => format!("{n} subtitles"),
    };
    let layer_label = format!("Layer {}/{}", active_layer + 1, lane_count);
    let time_label = format!("{} / {}", format_timestamp(current_time), format_timestamp(duration));
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; height: 22px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM}; flex-shrink: 0;",
            span { "{subtitles_label}" }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                span { "{layer_label}" }
                span { "{time_label}" }
            }
        }
    }
}
