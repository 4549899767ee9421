//! Editor state owned by the root component.
//!
//! Every pane reads from `EditorState` and reports user intent as an
//! `EditorCommand`; `EditorState::apply` is the only place state changes.

use crate::constants::{DEFAULT_LANE_COUNT, DEFAULT_SUBTITLE_SECONDS, DEFAULT_SUBTITLE_TEXT};
use crate::error::{EditorError, EditorResult};

use super::subtitle::validate_bounds;
use super::{SelectionState, Subtitle};

#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    /// Playback cursor in seconds
    pub current_time: f64,
    /// Media duration in seconds, 0 until metadata is known
    pub duration: f64,
    pub subtitles: Vec<Subtitle>,
    pub selection: SelectionState,
    /// Lane that receives new subtitles
    pub active_layer: usize,
    pub lane_count: usize,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(DEFAULT_LANE_COUNT)
    }
}

/// A single user-facing state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    Seek(f64),
    SetDuration(f64),
    /// Append a default-length subtitle at the cursor on the active lane.
    AddSubtitle,
    EditText { id: String, text: String },
    SetBounds { id: String, start_time: f64, end_time: f64 },
    RemoveSubtitle(String),
    /// `None` clears the selection.
    Select(Option<String>),
    SetActiveLayer(usize),
}

impl EditorState {
    pub fn new(lane_count: usize) -> Self {
        Self {
            current_time: 0.0,
            duration: 0.0,
            subtitles: Vec::new(),
            selection: SelectionState::default(),
            active_layer: 0,
            lane_count: lane_count.max(1),
        }
    }

    pub fn apply(&mut self, command: EditorCommand) -> EditorResult<()> {
        tracing::debug!(?command, "applying editor command");
        match command {
            EditorCommand::Seek(time) => {
                self.seek(time);
                Ok(())
            }
            EditorCommand::SetDuration(duration) => {
                self.duration = if duration.is_finite() { duration.max(0.0) } else { 0.0 };
                Ok(())
            }
            EditorCommand::AddSubtitle => self.add_subtitle().map(|_| ()),
            EditorCommand::EditText { id, text } => {
                self.subtitles = with_text(&self.subtitles, &id, &text)?;
                Ok(())
            }
            EditorCommand::SetBounds { id, start_time, end_time } => {
                self.subtitles = with_bounds(&self.subtitles, &id, start_time, end_time)?;
                Ok(())
            }
            EditorCommand::RemoveSubtitle(id) => {
                self.subtitles = without(&self.subtitles, &id)?;
                self.selection.remove_subtitle(&id);
                Ok(())
            }
            EditorCommand::Select(Some(id)) => {
                if !self.subtitles.iter().any(|s| s.id == id) {
                    return Err(EditorError::UnknownSubtitle(id));
                }
                self.selection.select_subtitle(id);
                Ok(())
            }
            EditorCommand::Select(None) => {
                self.selection.clear();
                Ok(())
            }
            EditorCommand::SetActiveLayer(layer) => {
                if layer >= self.lane_count {
                    return Err(EditorError::LaneOutOfRange {
                        lane: layer,
                        lane_count: self.lane_count,
                    });
                }
                self.active_layer = layer;
                Ok(())
            }
        }
    }

    /// Append a new subtitle and return its id.
    pub fn add_subtitle(&mut self) -> EditorResult<String> {
        let start = self.current_time.max(0.0);
        let subtitle = Subtitle::new(
            start,
            start + DEFAULT_SUBTITLE_SECONDS,
            DEFAULT_SUBTITLE_TEXT,
            self.active_layer,
        )?;
        let id = subtitle.id.clone();
        self.subtitles = self
            .subtitles
            .iter()
            .cloned()
            .chain(std::iter::once(subtitle))
            .collect();
        Ok(id)
    }

    pub fn selected_subtitle(&self) -> Option<&Subtitle> {
        self.selection.resolve(&self.subtitles)
    }

    fn seek(&mut self, time: f64) {
        if !time.is_finite() {
            return;
        }
        let upper = if self.duration > 0.0 { self.duration } else { f64::INFINITY };
        self.current_time = time.clamp(0.0, upper);
    }
}

/// Copy of `subtitles` with the text of `id` replaced.
pub fn with_text(subtitles: &[Subtitle], id: &str, text: &str) -> EditorResult<Vec<Subtitle>> {
    ensure_present(subtitles, id)?;
    Ok(subtitles
        .iter()
        .map(|s| {
            if s.id == id {
                Subtitle { text: text.to_string(), ..s.clone() }
            } else {
                s.clone()
            }
        })
        .collect())
}

/// Copy of `subtitles` with new bounds for `id`.
pub fn with_bounds(
    subtitles: &[Subtitle],
    id: &str,
    start_time: f64,
    end_time: f64,
) -> EditorResult<Vec<Subtitle>> {
    ensure_present(subtitles, id)?;
    validate_bounds(start_time, end_time)?;
    Ok(subtitles
        .iter()
        .map(|s| {
            if s.id == id {
                Subtitle { start_time, end_time, ..s.clone() }
            } else {
                s.clone()
            }
        })
        .collect())
}

/// Copy of `subtitles` without `id`.
pub fn without(subtitles: &[Subtitle], id: &str) -> EditorResult<Vec<Subtitle>> {
    ensure_present(subtitles, id)?;
    Ok(subtitles.iter().filter(|s| s.id != id).cloned().collect())
}

fn ensure_present(subtitles: &[Subtitle], id: &str) -> EditorResult<()> {
    if subtitles.iter().any(|s| s.id == id) {
        Ok(())
    } else {
        Err(EditorError::UnknownSubtitle(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subtitle(id: &str, start: f64, end: f64, layer: usize) -> Subtitle {
        Subtitle {
            id: id.to_string(),
            start_time: start,
            end_time: end,
            text: format!("text {id}"),
            layer,
        }
    }

    #[test]
    fn test_add_subtitle_at_cursor_on_active_layer() {
        let mut state = EditorState::default();
        state.subtitles = vec![subtitle("a", 0.0, 1.0, 0), subtitle("b", 3.0, 4.0, 1)];
        let before = state.subtitles.clone();
        state.current_time = 10.0;
        state.apply(EditorCommand::SetActiveLayer(2)).unwrap();

        state.apply(EditorCommand::AddSubtitle).unwrap();

        assert_eq!(state.subtitles.len(), 3);
        assert_eq!(&state.subtitles[..2], &before[..]);
        let added = state.subtitles.last().unwrap();
        assert_eq!(added.start_time, 10.0);
        assert_eq!(added.end_time, 12.0);
        assert_eq!(added.layer, 2);
        assert_eq!(added.text, "New subtitle");
    }

    #[test]
    fn test_edit_text_touches_only_target() {
        let mut state = EditorState::default();
        state.subtitles = vec![
            subtitle("x", 0.0, 1.0, 0),
            subtitle("abc", 2.0, 3.0, 1),
            subtitle("y", 4.0, 5.0, 2),
        ];
        let before = state.subtitles.clone();

        state
            .apply(EditorCommand::EditText { id: "abc".into(), text: "hello".into() })
            .unwrap();

        assert_eq!(state.subtitles[0], before[0]);
        assert_eq!(state.subtitles[2], before[2]);
        let edited = &state.subtitles[1];
        assert_eq!(edited.text, "hello");
        assert_eq!(
            Subtitle { text: before[1].text.clone(), ..edited.clone() },
            before[1]
        );
    }

    #[test]
    fn test_edit_unknown_id_is_rejected() {
        let mut state = EditorState::default();
        let result = state.apply(EditorCommand::EditText { id: "nope".into(), text: "t".into() });
        assert!(matches!(result, Err(EditorError::UnknownSubtitle(_))));
    }

    #[test]
    fn test_set_bounds_validates() {
        let mut state = EditorState::default();
        state.subtitles = vec![subtitle("a", 1.0, 2.0, 0)];
        let result = state.apply(EditorCommand::SetBounds {
            id: "a".into(),
            start_time: 5.0,
            end_time: 5.0,
        });
        assert!(matches!(result, Err(EditorError::InvalidBounds { .. })));
        assert_eq!(state.subtitles[0].start_time, 1.0);

        state
            .apply(EditorCommand::SetBounds { id: "a".into(), start_time: 3.0, end_time: 6.5 })
            .unwrap();
        assert_eq!(state.subtitles[0].start_time, 3.0);
        assert_eq!(state.subtitles[0].end_time, 6.5);
    }

    #[test]
    fn test_remove_clears_selection() {
        let mut state = EditorState::default();
        state.subtitles = vec![subtitle("a", 1.0, 2.0, 0), subtitle("b", 2.0, 3.0, 0)];
        state.apply(EditorCommand::Select(Some("a".into()))).unwrap();
        state.apply(EditorCommand::RemoveSubtitle("a".into())).unwrap();
        assert_eq!(state.subtitles.len(), 1);
        assert_eq!(state.subtitles[0].id, "b");
        assert!(state.selected_subtitle().is_none());
    }

    #[test]
    fn test_select_unknown_is_rejected() {
        let mut state = EditorState::default();
        let result = state.apply(EditorCommand::Select(Some("ghost".into())));
        assert!(result.is_err());
        assert!(state.selection.primary_subtitle().is_none());
    }

    #[test]
    fn test_active_layer_out_of_range() {
        let mut state = EditorState::new(4);
        let result = state.apply(EditorCommand::SetActiveLayer(4));
        assert!(matches!(result, Err(EditorError::LaneOutOfRange { lane: 4, lane_count: 4 })));
        assert_eq!(state.active_layer, 0);
    }

    #[test]
    fn test_seek_clamps_to_duration() {
        let mut state = EditorState::default();
        state.apply(EditorCommand::Seek(42.0)).unwrap();
        assert_eq!(state.current_time, 42.0);

        state.apply(EditorCommand::SetDuration(30.0)).unwrap();
        state.apply(EditorCommand::Seek(42.0)).unwrap();
        assert_eq!(state.current_time, 30.0);
        state.apply(EditorCommand::Seek(-3.0)).unwrap();
        assert_eq!(state.current_time, 0.0);
        state.apply(EditorCommand::Seek(f64::NAN)).unwrap();
        assert_eq!(state.current_time, 0.0);
    }

    #[test]
    fn test_duration_rejects_nan() {
        let mut state = EditorState::default();
        state.apply(EditorCommand::SetDuration(f64::NAN)).unwrap();
        assert_eq!(state.duration, 0.0);
    }
}
