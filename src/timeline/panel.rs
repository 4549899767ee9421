use dioxus::prelude::*;
use serde::Deserialize;
use std::time::Duration;

use crate::constants::{
    BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT, TEXT_DIM, TEXT_MUTED, TIMELINE_CANVAS_SCRIPT,
    TIMELINE_MAX_ZOOM, TIMELINE_MIN_ZOOM, TIMELINE_VIEWPORT_SCRIPT, TIMELINE_ZOOM_STEP,
};
use crate::core::timeline_geometry::{clamp_zoom, hit_test, TimelineView};
use crate::core::timeline_render::build_scene;
use crate::state::EditorState;

use super::scrollbar::Scrollbar;

/// Size of the visible timeline area, reported by `TIMELINE_VIEWPORT_SCRIPT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
struct ViewportSize {
    width: f64,
    height: f64,
}

fn timeline_view(
    state: &EditorState,
    zoom: f64,
    scroll_offset: f64,
    viewport: ViewportSize,
) -> TimelineView {
    TimelineView {
        zoom,
        scroll_offset,
        viewport_width: viewport.width,
        height: viewport.height,
        duration: state.duration,
        lane_count: state.lane_count,
    }
}

/// Zoomable, scrollable multi-lane timeline drawn on a canvas.
#[component]
pub fn WaveformEditor(
    editor: Signal<EditorState>,
    on_seek: EventHandler<f64>,
    on_select: EventHandler<Option<String>>,
    on_activate_lane: EventHandler<usize>,
) -> Element {
    let mut zoom = use_signal(|| 1.0_f64);
    let mut scroll_offset = use_signal(|| 0.0_f64);
    let viewport = use_signal(ViewportSize::default);
    let mut viewport_eval = use_signal(|| None::<document::Eval>);
    let mut canvas_eval = use_signal(|| None::<document::Eval>);

    use_effect(move || {
        if viewport_eval.peek().is_some() {
            return;
        }
        viewport_eval.set(Some(document::eval(TIMELINE_VIEWPORT_SCRIPT)));
    });

    use_effect(move || {
        if canvas_eval.peek().is_some() {
            return;
        }
        canvas_eval.set(Some(document::eval(TIMELINE_CANVAS_SCRIPT)));
    });

    use_future(move || {
        let mut viewport = viewport.clone();
        async move {
            loop {
                let Some(mut eval) = viewport_eval() else {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                };
                loop {
                    match eval.recv::<ViewportSize>().await {
                        Ok(size) => {
                            if viewport() != size {
                                viewport.set(size);
                            }
                        }
                        Err(_) => break,
                    }
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }
    });

    // Zoom never re-centers; the offset is only pulled back into range.
    use_effect(move || {
        let view = timeline_view(&editor.read(), zoom(), scroll_offset(), viewport());
        let clamped = view.clamp_scroll(view.scroll_offset);
        if (clamped - view.scroll_offset).abs() > 1e-6 {
            scroll_offset.set(clamped);
        }
    });

    // Full repaint whenever anything the scene depends on changes.
    use_effect(move || {
        let Some(eval) = canvas_eval() else {
            return;
        };
        let scene = {
            let state = editor.read();
            let view = timeline_view(&state, zoom(), scroll_offset(), viewport());
            build_scene(
                &view,
                &state.subtitles,
                state.selection.primary_subtitle(),
                state.current_time,
                state.active_layer,
            )
        };
        if let Err(err) = eval.send(&scene) {
            tracing::warn!(?err, "failed to send timeline scene");
        }
    });

    let handle_click = move |x: f64, y: f64, click_count: u32| {
        let hit = {
            let state = editor.read();
            let view = timeline_view(&state, zoom(), scroll_offset(), viewport());
            hit_test(&view, &state.subtitles, x, y, click_count)
        };
        tracing::debug!(?hit, "timeline click");
        on_seek.call(hit.time);
        if let Some(lane) = hit.activate_lane {
            on_activate_lane.call(lane);
        }
        on_select.call(hit.selection);
    };

    let view = timeline_view(&editor.read(), zoom(), scroll_offset(), viewport());
    let zoom_value = zoom();
    let zoom_label = format!("{:.0}%", zoom_value * 100.0);

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                height: 100%; min-height: 0;
                background-color: {BG_ELEVATED};
                overflow: hidden;
            ",

            // Header
            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    height: 32px; padding: 0 14px;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                    flex-shrink: 0;
                ",
                span { style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;", "Timeline" }

                div {
                    style: "display: flex; align-items: center; gap: 6px;",
                    button {
                        class: "collapse-btn",
                        style: "width: 20px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 12px; cursor: pointer; display: flex; align-items: center; justify-content: center;",
                        onclick: move |_| zoom.set(clamp_zoom(zoom() / TIMELINE_ZOOM_STEP)),
                        "−"
                    }
                    input {
                        r#type: "range",
                        min: "{TIMELINE_MIN_ZOOM}",
                        max: "{TIMELINE_MAX_ZOOM}",
                        step: "0.1",
                        value: "{zoom_value}",
                        style: "width: 120px;",
                        oninput: move |e| {
                            if let Ok(value) = e.value().parse::<f64>() {
                                zoom.set(clamp_zoom(value));
                            }
                        },
                    }
                    button {
                        class: "collapse-btn",
                        style: "width: 20px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 12px; cursor: pointer; display: flex; align-items: center; justify-content: center;",
                        onclick: move |_| zoom.set(clamp_zoom(zoom() * TIMELINE_ZOOM_STEP)),
                        "+"
                    }
                    span {
                        style: "font-size: 10px; color: {TEXT_DIM}; min-width: 40px; text-align: center;",
                        "{zoom_label}"
                    }
                }
            }

            // Viewport: the canvas is viewport-sized; the scene arrives
            // already offset by the scroll position.
            div {
                id: "timeline-viewport",
                style: "flex: 1; position: relative; overflow: hidden; cursor: pointer; min-height: 0;",
                onclick: move |e| {
                    let point = e.element_coordinates();
                    handle_click(point.x, point.y, 1);
                },
                ondoubleclick: move |e| {
                    let point = e.element_coordinates();
                    handle_click(point.x, point.y, 2);
                },
                canvas {
                    id: "timeline-canvas",
                    width: "1",
                    height: "1",
                    style: "position: absolute; left: 0; top: 0; pointer-events: none;",
                }
            }

            Scrollbar {
                content_width: view.total_width(),
                viewport_width: view.viewport_width,
                scroll_position: view.scroll_offset,
                on_scroll: move |offset| {
                    let view = timeline_view(&editor.read(), zoom(), scroll_offset(), viewport());
                    scroll_offset.set(view.clamp_scroll(offset));
                },
            }
        }
    }
}
