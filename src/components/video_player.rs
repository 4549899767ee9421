//! Playback pane: the `<video>` element, caption overlay and transport.
//!
//! The element talks to Rust through `PLAYER_BRIDGE_SCRIPT`. Native time and
//! duration updates flow into the editor state; cursor changes made elsewhere
//! (timeline clicks, hotkeys) are pushed back to the element only when they
//! drift past the sync tolerance, and re-sent on metadata load until a time
//! update confirms them.

use dioxus::prelude::*;
use std::time::Duration;

use crate::app::dispatch;
use crate::components::playback_controls::PlaybackBtn;
use crate::constants::*;
use crate::core::playback::{
    current_subtitle, format_timestamp, PlaybackSync, PlayerCommand, PlayerEvent,
};
use crate::state::{EditorCommand, EditorState, Subtitle};

/// Handle to the media element bridge.
#[derive(Clone, Copy)]
pub struct PlayerBridge {
    eval: Signal<Option<document::Eval>>,
    sync: Signal<PlaybackSync>,
}

impl PlayerBridge {
    pub fn send(&self, command: PlayerCommand) {
        let Some(eval) = self.eval.peek().clone() else {
            tracing::debug!(?command, "player bridge not ready");
            return;
        };
        if let Err(err) = eval.send(&command) {
            tracing::warn!(?command, ?err, "failed to send player command");
        }
    }

    pub fn toggle_playback(&self) {
        let command = self.sync.read().toggle_command();
        self.send(command);
    }

    pub fn seek_by(&self, delta: f64) {
        self.send(PlayerCommand::SeekBy { delta });
    }

    pub fn is_playing(&self) -> bool {
        self.sync.read().is_playing
    }
}

/// Start the media element bridge and keep it synchronized with `editor`.
pub fn use_player_bridge(editor: Signal<EditorState>) -> PlayerBridge {
    let mut eval = use_signal(|| None::<document::Eval>);
    let mut sync = use_signal(PlaybackSync::default);
    let bridge = PlayerBridge { eval, sync };

    use_effect(move || {
        if eval.peek().is_some() {
            return;
        }
        eval.set(Some(document::eval(PLAYER_BRIDGE_SCRIPT)));
    });

    use_future(move || {
        let mut sync = sync.clone();
        async move {
            loop {
                let Some(mut channel) = eval() else {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                };
                loop {
                    match channel.recv::<PlayerEvent>().await {
                        Ok(event) => {
                            sync.write().observe(&event);
                            match event {
                                PlayerEvent::Time { time } => {
                                    dispatch(editor, EditorCommand::Seek(time))
                                }
                                PlayerEvent::Duration { duration } => {
                                    dispatch(editor, EditorCommand::SetDuration(duration));
                                    // Seeks sent before metadata loaded were dropped.
                                    let pending = sync.peek().pending_command();
                                    if let Some(command) = pending {
                                        bridge.send(command);
                                    }
                                }
                                PlayerEvent::Play | PlayerEvent::Pause => {}
                            }
                        }
                        Err(err) => {
                            tracing::debug!(?err, "player bridge closed");
                            break;
                        }
                    }
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            }
        }
    });

    use_effect(move || {
        let requested = editor.read().current_time;
        let command = sync.write().sync_to(requested);
        if let Some(command) = command {
            bridge.send(command);
        }
    });

    bridge
}

#[component]
pub fn VideoPlayer(
    src: Option<String>,
    media_name: Option<String>,
    current_time: f64,
    duration: f64,
    is_playing: bool,
    subtitles: Vec<Subtitle>,
    on_play_pause: EventHandler<MouseEvent>,
    on_seek_by: EventHandler<f64>,
    on_open_media: EventHandler<MouseEvent>,
) -> Element {
    let caption = current_subtitle(&subtitles, current_time).map(|s| s.text.clone());
    let play_icon = if is_playing { "⏸" } else { "▶" };
    let play_title = if is_playing { "Pause" } else { "Play" };
    let has_media = src.is_some();
    let time_label = format!("{} / {}", format_timestamp(current_time), format_timestamp(duration));
    let name_label = media_name.unwrap_or_default();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; flex: 1; min-height: 0; min-width: 0; background-color: {BG_DEEPEST};",

            div {
                style: "
                    display: grid; grid-template-columns: auto 1fr auto; align-items: center;
                    height: 32px; padding: 0 14px;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                ",
                span {
                    style: "grid-column: 1; font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;",
                    "Preview"
                }
                span {
                    style: "
                        grid-column: 2; justify-self: center; min-width: 0;
                        font-family: 'SF Mono', Consolas, monospace;
                        font-size: 10px; color: {TEXT_DIM};
                        white-space: nowrap; overflow: hidden; text-overflow: ellipsis;
                    ",
                    "{name_label}"
                }
                span {
                    style: "grid-column: 3; justify-self: end; font-family: 'SF Mono', Consolas, monospace; font-size: 11px; color: {TEXT_DIM};",
                    "{time_label}"
                }
            }

            div {
                style: "flex: 1; position: relative; min-height: 0; overflow: hidden; background-color: #000;",
                if let Some(url) = src {
                    video {
                        id: VIDEO_ELEMENT_ID,
                        src: "{url}",
                        preload: "metadata",
                        style: "position: absolute; inset: 0; width: 100%; height: 100%; object-fit: contain;",
                    }
                } else {
                    div {
                        style: "position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 12px; color: {TEXT_DIM};",
                        div {
                            style: "width: 48px; height: 48px; border: 1px solid {BORDER_DEFAULT}; border-radius: 50%; display: flex; align-items: center; justify-content: center; font-size: 14px;",
                            "?"
                        }
                        span { style: "font-size: 12px;", "No video loaded" }
                        button {
                            class: "collapse-btn",
                            style: "
                                background: {BG_SURFACE}; border: 1px solid {BORDER_DEFAULT}; color: {TEXT_PRIMARY};
                                font-size: 12px; cursor: pointer; padding: 6px 12px; border-radius: 4px;
                            ",
                            onclick: move |e| on_open_media.call(e),
                            "Open video…"
                        }
                    }
                }

                div {
                    style: "
                        position: absolute; left: 0; right: 0; bottom: 0;
                        padding: 16px; display: flex; flex-direction: column; align-items: center; gap: 12px;
                        background: linear-gradient(to top, rgba(0,0,0,0.5), transparent);
                        pointer-events: none;
                    ",
                    if let Some(text) = caption {
                        div {
                            style: "font-size: 18px; font-weight: 500; color: #fff; text-align: center; white-space: pre-wrap; text-shadow: 0 1px 3px rgba(0,0,0,0.8);",
                            "{text}"
                        }
                    }
                    div {
                        style: "display: flex; align-items: center; gap: 16px; pointer-events: auto;",
                        PlaybackBtn {
                            icon: "⏪",
                            title: "Back 5 seconds",
                            disabled: !has_media,
                            on_click: move |_| on_seek_by.call(-SEEK_STEP_SECONDS),
                        }
                        PlaybackBtn {
                            icon: play_icon,
                            title: play_title,
                            primary: true,
                            disabled: !has_media,
                            on_click: move |e| on_play_pause.call(e),
                        }
                        PlaybackBtn {
                            icon: "⏩",
                            title: "Forward 5 seconds",
                            disabled: !has_media,
                            on_click: move |_| on_seek_by.call(SEEK_STEP_SECONDS),
                        }
                    }
                }
            }
        }
    }
}
