//! Selection state shared across views.

use super::Subtitle;

/// Tracks the selected subtitle, if any, by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    subtitle_id: Option<String>,
}

impl SelectionState {
    pub fn clear(&mut self) {
        self.subtitle_id = None;
    }

    /// Replace the selection with a single subtitle.
    pub fn select_subtitle(&mut self, id: impl Into<String>) {
        self.subtitle_id = Some(id.into());
    }

    /// Drop the selection if it points at `id`.
    pub fn remove_subtitle(&mut self, id: &str) {
        if self.subtitle_id.as_deref() == Some(id) {
            self.subtitle_id = None;
        }
    }

    pub fn primary_subtitle(&self) -> Option<&str> {
        self.subtitle_id.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.subtitle_id.as_deref() == Some(id)
    }

    /// Resolve the selected id against the current list.
    pub fn resolve<'a>(&self, subtitles: &'a [Subtitle]) -> Option<&'a Subtitle> {
        let id = self.subtitle_id.as_deref()?;
        subtitles.iter().find(|s| s.id == id)
    }
}
