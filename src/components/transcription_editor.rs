use dioxus::prelude::*;
use crate::components::common::TimeField;
use crate::constants::*;
use crate::core::playback::format_timestamp;
use crate::state::Subtitle;

/// Subtitle list in insertion order with inline editing.
#[component]
pub fn TranscriptionEditor(
    subtitles: Vec<Subtitle>,
    selected_id: Option<String>,
    on_select: EventHandler<String>,
    on_add: EventHandler<MouseEvent>,
    on_edit_text: EventHandler<(String, String)>, // (id, text)
    on_edit_bounds: EventHandler<(String, f64, f64)>, // (id, start, end)
    on_remove: EventHandler<String>,
    on_input_focus: EventHandler<bool>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; flex: 1; min-height: 0; min-width: 0; background-color: {BG_ELEVATED};",

            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    height: 32px; padding: 0 14px; flex-shrink: 0;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                ",
                span {
                    style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;",
                    "Subtitles"
                }
                button {
                    class: "collapse-btn",
                    style: "
                        background: transparent; border: none; color: {TEXT_PRIMARY};
                        font-size: 12px; cursor: pointer; padding: 4px 8px; border-radius: 4px;
                    ",
                    onclick: move |e| on_add.call(e),
                    "+ Add Subtitle"
                }
            }

            div {
                style: "flex: 1; overflow-y: auto; padding: 10px 12px; display: flex; flex-direction: column; gap: 8px;",
                if subtitles.is_empty() {
                    div {
                        style: "padding: 24px 0; text-align: center; font-size: 12px; color: {TEXT_DIM};",
                        "No subtitles yet"
                    }
                }
                for subtitle in subtitles.iter() {
                    SubtitleEntry {
                        key: "{subtitle.id}",
                        subtitle: subtitle.clone(),
                        selected: selected_id.as_deref() == Some(subtitle.id.as_str()),
                        on_select: move |id| on_select.call(id),
                        on_edit_text: move |edit| on_edit_text.call(edit),
                        on_edit_bounds: move |edit| on_edit_bounds.call(edit),
                        on_remove: move |id| on_remove.call(id),
                        on_input_focus: move |focused| on_input_focus.call(focused),
                    }
                }
            }
        }
    }
}

#[component]
fn SubtitleEntry(
    subtitle: Subtitle,
    selected: bool,
    on_select: EventHandler<String>,
    on_edit_text: EventHandler<(String, String)>,
    on_edit_bounds: EventHandler<(String, f64, f64)>,
    on_remove: EventHandler<String>,
    on_input_focus: EventHandler<bool>,
) -> Element {
    let (border, background) = if selected {
        (BORDER_ACCENT, "rgba(59, 130, 246, 0.1)")
    } else {
        (BORDER_DEFAULT, BG_SURFACE)
    };
    let range_label = format!(
        "{} → {}",
        format_timestamp(subtitle.start_time),
        format_timestamp(subtitle.end_time)
    );
    let layer_label = format!("Layer {}", subtitle.layer + 1);

    let id_select = subtitle.id.clone();
    let id_text = subtitle.id.clone();
    let id_start = subtitle.id.clone();
    let id_end = subtitle.id.clone();
    let id_remove = subtitle.id.clone();
    let (start, end) = (subtitle.start_time, subtitle.end_time);

    rsx! {
        div {
            style: "
                border: 1px solid {border}; border-radius: 6px;
                background-color: {background};
                padding: 10px; display: flex; flex-direction: column; gap: 8px;
                transition: border-color 0.12s ease;
            ",
            onclick: move |_| on_select.call(id_select.clone()),

            div {
                style: "display: flex; align-items: center; justify-content: space-between; font-size: 11px; color: {TEXT_SECONDARY};",
                span { style: "font-family: 'SF Mono', Consolas, monospace;", "{range_label}" }
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    span { style: "color: {TEXT_MUTED};", "{layer_label}" }
                    button {
                        class: "collapse-btn",
                        title: "Remove subtitle",
                        style: "width: 20px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 12px; cursor: pointer;",
                        onclick: move |e| {
                            e.stop_propagation();
                            on_remove.call(id_remove.clone());
                        },
                        "×"
                    }
                }
            }

            div {
                style: "display: flex; gap: 12px;",
                TimeField {
                    label: "Start",
                    value: start,
                    on_commit: move |t| on_edit_bounds.call((id_start.clone(), t, end)),
                    on_focus_change: move |focused| on_input_focus.call(focused),
                }
                TimeField {
                    label: "End",
                    value: end,
                    on_commit: move |t| on_edit_bounds.call((id_end.clone(), start, t)),
                    on_focus_change: move |focused| on_input_focus.call(focused),
                }
            }

            textarea {
                value: "{subtitle.text}",
                placeholder: "Enter subtitle text...",
                style: "
                    min-height: 60px; resize: vertical; box-sizing: border-box; width: 100%;
                    padding: 6px 8px; font-size: 13px; font-family: inherit;
                    background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                    outline: none; user-select: text;
                ",
                oninput: move |e| on_edit_text.call((id_text.clone(), e.value())),
                onfocus: move |_| on_input_focus.call(true),
                onblur: move |_| on_input_focus.call(false),
            }
        }
    }
}
