use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EditorError, EditorResult};

/// A timed caption placed on one timeline lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtitle {
    /// Unique identifier
    pub id: String,
    /// Start time in seconds
    pub start_time: f64,
    /// End time in seconds, always greater than `start_time`
    pub end_time: f64,
    pub text: String,
    /// Lane index on the timeline
    #[serde(default)]
    pub layer: usize,
}

impl Subtitle {
    /// Create a subtitle with a fresh id after validating its bounds.
    pub fn new(
        start_time: f64,
        end_time: f64,
        text: impl Into<String>,
        layer: usize,
    ) -> EditorResult<Self> {
        validate_bounds(start_time, end_time)?;
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            start_time,
            end_time,
            text: text.into(),
            layer,
        })
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Inclusive on both ends.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start_time && time <= self.end_time
    }
}

pub fn validate_bounds(start_time: f64, end_time: f64) -> EditorResult<()> {
    let valid = start_time.is_finite()
        && end_time.is_finite()
        && start_time >= 0.0
        && end_time > start_time;
    if valid {
        Ok(())
    } else {
        Err(EditorError::InvalidBounds {
            start: start_time,
            end: end_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_inverted_bounds() {
        assert!(Subtitle::new(3.0, 3.0, "x", 0).is_err());
        assert!(Subtitle::new(3.0, 1.0, "x", 0).is_err());
        assert!(Subtitle::new(-1.0, 1.0, "x", 0).is_err());
        assert!(Subtitle::new(f64::NAN, 1.0, "x", 0).is_err());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Subtitle::new(0.0, 1.0, "a", 0).unwrap();
        let b = Subtitle::new(0.0, 1.0, "b", 0).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let sub = Subtitle::new(5.0, 7.0, "x", 0).unwrap();
        assert!(sub.contains(5.0));
        assert!(sub.contains(6.0));
        assert!(sub.contains(7.0));
        assert!(!sub.contains(4.99));
        assert!(!sub.contains(7.01));
    }

    #[test]
    fn test_layer_defaults_when_missing() {
        let json = r#"{ "id": "abc", "start_time": 1.0, "end_time": 2.0, "text": "hi" }"#;
        let sub: Subtitle = serde_json::from_str(json).unwrap();
        assert_eq!(sub.layer, 0);
        assert_eq!(sub.duration(), 1.0);
    }
}
