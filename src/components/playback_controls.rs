use dioxus::prelude::*;
use crate::constants::{BG_HOVER, TEXT_PRIMARY};

/// Transport button
#[component]
pub(crate) fn PlaybackBtn(
    icon: &'static str,
    title: &'static str,
    #[props(default = false)] primary: bool,
    #[props(default = false)] disabled: bool,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let bg = if primary { BG_HOVER } else { "transparent" };
    let size = if primary { 40 } else { 32 };
    let opacity = if disabled { "0.4" } else { "1" };
    rsx! {
        button {
            class: "collapse-btn",
            title: "{title}",
            disabled: disabled,
            style: "width: {size}px; height: {size}px; border: none; border-radius: 50%; background-color: {bg}; color: {TEXT_PRIMARY}; opacity: {opacity}; font-size: 13px; cursor: pointer; display: flex; align-items: center; justify-content: center; transition: all 0.12s ease;",
            onclick: move |e| on_click.call(e),
            "{icon}"
        }
    }
}
