//! Root component: owns the editor state and wires the three panes together.

use std::path::PathBuf;

use dioxus::prelude::*;

use crate::components::{StatusBar, TitleBar, TranscriptionEditor, VideoPlayer, use_player_bridge};
use crate::config::EditorConfig;
use crate::constants::*;
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{EditorCommand, EditorState};
use crate::timeline::WaveformEditor;
use crate::utils::get_local_file_url;

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "webm", "mov", "mkv", "ogv"];

/// Apply a command to the shared editor state, logging rejected edits.
pub fn dispatch(mut editor: Signal<EditorState>, command: EditorCommand) {
    if let Err(err) = editor.write().apply(command) {
        tracing::warn!(%err, "editor command rejected");
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<EditorConfig>();
    let editor = use_signal(|| EditorState::new(config.lane_count));
    let mut media_path = use_signal(|| config.media_path.clone());
    let mut input_focused = use_signal(|| false);
    let player = use_player_bridge(editor);

    let open_media = move |_: MouseEvent| {
        let picked = rfd::FileDialog::new()
            .add_filter("Video", VIDEO_EXTENSIONS)
            .pick_file();
        if let Some(path) = picked {
            tracing::info!(path = %path.display(), "opening video");
            media_path.set(Some(path));
            dispatch(editor, EditorCommand::SetDuration(0.0));
            dispatch(editor, EditorCommand::Seek(0.0));
        }
    };

    let handle_keydown = move |e: KeyboardEvent| {
        let context = HotkeyContext {
            has_selection: editor.read().selection.primary_subtitle().is_some(),
            input_focused: input_focused(),
        };
        let modifiers = e.modifiers();
        let action = match handle_hotkey(&e.key(), modifiers.ctrl(), modifiers.meta(), &context) {
            HotkeyResult::Action(action) => action,
            HotkeyResult::NoMatch | HotkeyResult::Suppressed => return,
        };
        e.prevent_default();
        match action {
            HotkeyAction::PlayPause => player.toggle_playback(),
            HotkeyAction::SeekBackward => player.seek_by(-SEEK_STEP_SECONDS),
            HotkeyAction::SeekForward => player.seek_by(SEEK_STEP_SECONDS),
            HotkeyAction::AddSubtitle => dispatch(editor, EditorCommand::AddSubtitle),
            HotkeyAction::DeleteSelection => {
                let selected = editor.read().selection.primary_subtitle().map(str::to_string);
                if let Some(id) = selected {
                    dispatch(editor, EditorCommand::RemoveSubtitle(id));
                }
            }
        }
    };

    let media: Option<PathBuf> = media_path();
    let media_url = media.as_deref().map(get_local_file_url);
    let media_name = media
        .as_deref()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned());

    let state = editor.read();
    let current_time = state.current_time;
    let duration = state.duration;
    let subtitles = state.subtitles.clone();
    let selected_id = state.selection.primary_subtitle().map(str::to_string);
    let active_layer = state.active_layer;
    let lane_count = state.lane_count;
    drop(state);

    rsx! {
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; overflow: hidden; background-color: {BG_BASE}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            ::-webkit-scrollbar {{ width: 6px; height: 6px; }}
            ::-webkit-scrollbar-track {{ background: transparent; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_DEFAULT}; border-radius: 3px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: {BORDER_STRONG}; }}
            .collapse-btn {{ opacity: 0.6; transition: opacity 0.15s ease, background-color 0.15s ease; }}
            .collapse-btn:hover {{ opacity: 1; background-color: {BG_HOVER} !important; }}
            "#
        }

        div {
            class: "app-container",
            tabindex: "0",
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                overflow: hidden; position: fixed; top: 0; left: 0; outline: none;
            ",
            onkeydown: handle_keydown,

            TitleBar {
                media_name: media_name.clone(),
                on_open_media: open_media,
            }

            // Playback and transcription share the top half.
            div {
                style: "display: flex; flex: 1; min-height: 0; overflow: hidden;",
                div {
                    style: "width: 50%; min-width: 0; display: flex; border-right: 1px solid {BORDER_DEFAULT};",
                    VideoPlayer {
                        src: media_url,
                        media_name,
                        current_time,
                        duration,
                        is_playing: player.is_playing(),
                        subtitles: subtitles.clone(),
                        on_play_pause: move |_| player.toggle_playback(),
                        on_seek_by: move |delta| player.seek_by(delta),
                        on_open_media: open_media,
                    }
                }
                div {
                    style: "width: 50%; min-width: 0; display: flex;",
                    TranscriptionEditor {
                        subtitles: subtitles.clone(),
                        selected_id,
                        on_select: move |id: String| dispatch(editor, EditorCommand::Select(Some(id))),
                        on_add: move |_| dispatch(editor, EditorCommand::AddSubtitle),
                        on_edit_text: move |(id, text): (String, String)| {
                            dispatch(editor, EditorCommand::EditText { id, text })
                        },
                        on_edit_bounds: move |(id, start_time, end_time): (String, f64, f64)| {
                            dispatch(editor, EditorCommand::SetBounds { id, start_time, end_time })
                        },
                        on_remove: move |id: String| dispatch(editor, EditorCommand::RemoveSubtitle(id)),
                        on_input_focus: move |focused: bool| input_focused.set(focused),
                    }
                }
            }

            div {
                style: "height: {TIMELINE_HEIGHT}px; flex-shrink: 0; border-top: 1px solid {BORDER_DEFAULT}; display: flex; flex-direction: column;",
                WaveformEditor {
                    editor,
                    on_seek: move |time: f64| dispatch(editor, EditorCommand::Seek(time)),
                    on_select: move |id: Option<String>| dispatch(editor, EditorCommand::Select(id)),
                    on_activate_lane: move |lane: usize| dispatch(editor, EditorCommand::SetActiveLayer(lane)),
                }
            }

            StatusBar {
                current_time,
                duration,
                subtitle_count: subtitles.len(),
                active_layer,
                lane_count,
            }
        }
    }
}
