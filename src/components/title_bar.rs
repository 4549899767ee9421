use dioxus::prelude::*;
use crate::constants::*;

#[component]
pub fn TitleBar(media_name: Option<String>, on_open_media: EventHandler<MouseEvent>) -> Element {
    let media_label = media_name.unwrap_or_else(|| "No video".to_string());
    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: 40px; padding: 0 16px;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                user-select: none; flex-shrink: 0;
            ",
            div {
                style: "display: flex; align-items: center; gap: 20px;",
                span { style: "font-size: 13px; font-weight: 600; color: {TEXT_SECONDARY};", "Subtitle Editor" }
                button {
                    class: "collapse-btn",
                    style: "
                        background: transparent; border: none; color: {TEXT_PRIMARY};
                        font-size: 12px; cursor: pointer; padding: 4px 8px; border-radius: 4px;
                    ",
                    onclick: move |e| on_open_media.call(e),
                    "Open Video…"
                }
            }
            span {
                style: "font-size: 11px; color: {TEXT_DIM}; font-family: 'SF Mono', Consolas, monospace; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                "{media_label}"
            }
        }
    }
}
