//! Hotkey system
//!
//! Centralized hotkey management for the subtitle editor.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on app state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()`
//! 3. Handle the action in the App component's hotkey handler

use dioxus::prelude::Key;

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Toggle playback.
    PlayPause,
    /// Seek the media element back by the transport step.
    SeekBackward,
    /// Seek the media element forward by the transport step.
    SeekForward,
    /// Append a subtitle at the playhead on the active lane.
    AddSubtitle,
    /// Remove the selected subtitle.
    DeleteSelection,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether a subtitle is selected
    pub has_selection: bool,
    /// Whether a text field has focus (suppresses every hotkey)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
///
/// # Returns
/// * `HotkeyResult::Action(action)` if a hotkey matched
/// * `HotkeyResult::NoMatch` if no binding exists
/// * `HotkeyResult::Suppressed` if input is focused
pub fn handle_hotkey(key: &Key, ctrl: bool, meta: bool, context: &HotkeyContext) -> HotkeyResult {
    // Typing in a subtitle must never trigger transport or edits.
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }

    match key {
        Key::Character(c) if (ctrl || meta) && (c == "n" || c == "N") => {
            return HotkeyResult::Action(HotkeyAction::AddSubtitle);
        }
        Key::Character(c) if c == " " => return HotkeyResult::Action(HotkeyAction::PlayPause),
        Key::ArrowLeft => return HotkeyResult::Action(HotkeyAction::SeekBackward),
        Key::ArrowRight => return HotkeyResult::Action(HotkeyAction::SeekForward),
        _ => {}
    }

    if context.has_selection && matches!(key, Key::Delete | Key::Backspace) {
        return HotkeyResult::Action(HotkeyAction::DeleteSelection);
    }

    HotkeyResult::NoMatch
}
