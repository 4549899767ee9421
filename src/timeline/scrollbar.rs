use dioxus::prelude::*;

use crate::constants::{BG_HOVER, BORDER_STRONG, SCROLLBAR_HEIGHT, TEXT_DIM};
use crate::core::scrollbar::{ScrollbarGeometry, ThumbDrag};

/// Horizontal scrollbar with a draggable thumb.
///
/// Pointer move/up are captured by a full-window overlay that only exists
/// while a drag is active.
#[component]
pub fn Scrollbar(
    content_width: f64,
    viewport_width: f64,
    scroll_position: f64,
    on_scroll: EventHandler<f64>,
) -> Element {
    let geometry = ScrollbarGeometry::new(content_width, viewport_width);
    let mut drag = use_signal(|| None::<ThumbDrag>);
    let thumb_width = geometry.thumb_width();
    let thumb_offset = geometry.thumb_offset(scroll_position);
    let thumb_color = if drag().is_some() { TEXT_DIM } else { BORDER_STRONG };

    rsx! {
        div {
            style: "
                position: relative; flex-shrink: 0;
                height: {SCROLLBAR_HEIGHT}px; width: 100%;
                background-color: {BG_HOVER};
            ",
            onmousedown: move |e| {
                e.prevent_default();
                let x = e.element_coordinates().x;
                on_scroll.call(geometry.track_click(x));
            },

            div {
                style: "
                    position: absolute; top: 0; left: 0;
                    height: 100%; width: {thumb_width}px;
                    transform: translateX({thumb_offset}px);
                    background-color: {thumb_color};
                    cursor: pointer;
                ",
                onmousedown: move |e| {
                    e.stop_propagation();
                    e.prevent_default();
                    drag.set(Some(ThumbDrag {
                        start_x: e.client_coordinates().x,
                        start_scroll: scroll_position,
                    }));
                },
            }
        }

        if drag().is_some() {
            div {
                style: "position: fixed; inset: 0; z-index: 1000; cursor: grabbing;",
                onmousemove: move |e| {
                    e.prevent_default();
                    if let Some(active) = drag() {
                        on_scroll.call(active.scroll_for(&geometry, e.client_coordinates().x));
                    }
                },
                onmouseup: move |_| drag.set(None),
            }
        }
    }
}
