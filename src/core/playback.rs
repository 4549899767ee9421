//! Playback synchronization between the editor cursor and the media element.

use serde::{Deserialize, Serialize};

use crate::constants::SYNC_TOLERANCE_SECONDS;
use crate::state::Subtitle;

/// Messages sent by the player bridge script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerEvent {
    Time { time: f64 },
    Duration { duration: f64 },
    Play,
    Pause,
}

/// Commands sent to the player bridge script.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerCommand {
    Seek { time: f64 },
    SeekBy { delta: f64 },
    Play,
    Pause,
}

/// Last state reported by the media element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlaybackSync {
    pub live_time: f64,
    pub is_playing: bool,
    /// Seek sent to the element that no time update has confirmed yet.
    pub pending_seek: Option<f64>,
}

impl PlaybackSync {
    /// Fold a bridge event into the live state.
    pub fn observe(&mut self, event: &PlayerEvent) {
        match event {
            PlayerEvent::Time { time } if time.is_finite() => {
                self.live_time = *time;
                self.pending_seek = None;
            }
            PlayerEvent::Play => self.is_playing = true,
            PlayerEvent::Pause => self.is_playing = false,
            _ => {}
        }
    }

    /// A seek is only issued when the requested time has drifted past the
    /// tolerance; the element's own time updates land inside it.
    pub fn needs_seek(&self, requested: f64) -> bool {
        requested.is_finite() && (self.live_time - requested).abs() > SYNC_TOLERANCE_SECONDS
    }

    /// The seek to send for `requested`, if any. The target stays pending
    /// until the element reports a time, so repeated requests do not queue
    /// duplicate seeks and a newer request replaces an unconfirmed one.
    pub fn sync_to(&mut self, requested: f64) -> Option<PlayerCommand> {
        if !requested.is_finite() {
            return None;
        }
        let settled = match self.pending_seek {
            Some(pending) => (pending - requested).abs() <= SYNC_TOLERANCE_SECONDS,
            None => !self.needs_seek(requested),
        };
        if settled {
            return None;
        }
        self.pending_seek = Some(requested);
        Some(PlayerCommand::Seek { time: requested })
    }

    /// Re-send the unconfirmed seek, e.g. once the element has loaded
    /// metadata and can honor it.
    pub fn pending_command(&self) -> Option<PlayerCommand> {
        self.pending_seek.map(|time| PlayerCommand::Seek { time })
    }

    pub fn toggle_command(&self) -> PlayerCommand {
        if self.is_playing {
            PlayerCommand::Pause
        } else {
            PlayerCommand::Play
        }
    }
}

/// First subtitle in list order whose interval contains `time`.
pub fn current_subtitle(subtitles: &[Subtitle], time: f64) -> Option<&Subtitle> {
    subtitles.iter().find(|s| s.contains(time))
}

/// `mm:ss.mmm`
pub fn format_timestamp(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).floor() as u64;
    let ms = total_ms % 1000;
    let total_secs = total_ms / 1000;
    format!("{:02}:{:02}.{:03}", total_secs / 60, total_secs % 60, ms)
}

/// `mm:ss` label used on the ruler.
pub fn format_ruler_label(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(id: &str, start: f64, end: f64) -> Subtitle {
        Subtitle {
            id: id.into(),
            start_time: start,
            end_time: end,
            text: id.into(),
            layer: 0,
        }
    }

    #[test]
    fn test_within_tolerance_does_not_seek() {
        let mut sync = PlaybackSync::default();
        sync.observe(&PlayerEvent::Time { time: 12.0 });
        assert!(!sync.needs_seek(12.05));
        assert!(!sync.needs_seek(11.95));
        assert!(sync.sync_to(12.1).is_none());
        assert!(sync.needs_seek(12.2));
    }

    #[test]
    fn test_sync_records_target() {
        let mut sync = PlaybackSync::default();
        assert_eq!(sync.sync_to(8.0), Some(PlayerCommand::Seek { time: 8.0 }));
        assert_eq!(sync.sync_to(8.0), None);
        assert_eq!(sync.live_time, 0.0);
    }

    #[test]
    fn test_unconfirmed_seek_is_reissued() {
        // Seek requested before any element is bound.
        let mut sync = PlaybackSync::default();
        assert_eq!(sync.sync_to(12.0), Some(PlayerCommand::Seek { time: 12.0 }));
        sync.observe(&PlayerEvent::Duration { duration: 60.0 });
        assert_eq!(sync.pending_command(), Some(PlayerCommand::Seek { time: 12.0 }));

        sync.observe(&PlayerEvent::Time { time: 12.0 });
        assert_eq!(sync.pending_command(), None);
        assert_eq!(sync.sync_to(12.0), None);
    }

    #[test]
    fn test_newer_request_replaces_pending_seek() {
        let mut sync = PlaybackSync::default();
        sync.sync_to(12.0);
        // Back at the element's own time: the stale target must be overridden.
        assert_eq!(sync.sync_to(0.0), Some(PlayerCommand::Seek { time: 0.0 }));
        assert_eq!(sync.pending_command(), Some(PlayerCommand::Seek { time: 0.0 }));
    }

    #[test]
    fn test_play_pause_tracking() {
        let mut sync = PlaybackSync::default();
        assert_eq!(sync.toggle_command(), PlayerCommand::Play);
        sync.observe(&PlayerEvent::Play);
        assert_eq!(sync.toggle_command(), PlayerCommand::Pause);
        sync.observe(&PlayerEvent::Pause);
        assert!(!sync.is_playing);
    }

    #[test]
    fn test_current_subtitle_first_match() {
        let subs = vec![sub("a", 0.0, 2.0), sub("b", 1.0, 3.0), sub("c", 5.0, 6.0)];
        assert_eq!(current_subtitle(&subs, 1.5).map(|s| s.id.as_str()), Some("a"));
        assert_eq!(current_subtitle(&subs, 2.5).map(|s| s.id.as_str()), Some("b"));
        assert!(current_subtitle(&subs, 4.0).is_none());
    }

    #[test]
    fn test_bridge_messages() {
        let event: PlayerEvent = serde_json::from_str(r#"{"kind":"time","time":3.5}"#).unwrap();
        assert_eq!(event, PlayerEvent::Time { time: 3.5 });
        let cmd = serde_json::to_value(PlayerCommand::SeekBy { delta: -5.0 }).unwrap();
        assert_eq!(cmd["kind"], "seek_by");
        assert_eq!(cmd["delta"], -5.0);
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "00:00.000");
        assert_eq!(format_timestamp(65.25), "01:05.250");
        assert_eq!(format_timestamp(-1.0), "00:00.000");
        assert_eq!(format_ruler_label(125), "02:05");
    }
}
