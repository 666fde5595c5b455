//! Routing track definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One routing-track definition along a single axis.
///
/// `count >= 0` by construction (`i32` kept for parity with the other
/// coordinate fields; the producer never emits negatives). A `step` of 0
/// is only meaningful for a degenerate single track.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Track {
    /// Track set name (the axis token, `X` or `Y`).
    pub name: String,
    /// Routing layers this track set applies to, in document order.
    pub layers: Vec<String>,
    /// Coordinate of the first track.
    pub start: i32,
    /// Spacing between adjacent tracks.
    pub step: i32,
    /// Number of tracks.
    pub count: i32,
    /// Mask number of the first track (multi-patterning).
    pub first_track_mask: i32,
    /// Whether all tracks share the first track's mask.
    pub same_mask: bool,
}

impl Track {
    /// Creates a track definition in its canonical empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this record to its canonical empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Track '{}'", self.name)?;
        writeln!(f, "  start = {}", self.start)?;
        writeln!(f, "  step = {}", self.step)?;
        writeln!(f, "  count = {}", self.count)?;
        write!(f, "  layers =")?;
        for layer in &self.layers {
            write!(f, " {layer}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_default() {
        let track = Track::new();
        assert!(track.name.is_empty());
        assert!(track.layers.is_empty());
        assert_eq!(track.start, 0);
        assert_eq!(track.step, 0);
        assert_eq!(track.count, 0);
        assert_eq!(track.first_track_mask, 0);
        assert!(!track.same_mask);
    }

    #[test]
    fn reset_clears_layers() {
        let mut track = Track {
            name: "X".into(),
            layers: vec!["M2".into(), "M4".into()],
            start: 100,
            step: 380,
            count: 500,
            first_track_mask: 1,
            same_mask: true,
        };
        track.reset();
        assert_eq!(track, Track::default());
        track.reset();
        assert_eq!(track, Track::default());
    }

    #[test]
    fn display_lists_layers() {
        let track = Track {
            name: "Y".into(),
            layers: vec!["M1".into(), "M3".into()],
            start: 0,
            step: 400,
            count: 250,
            first_track_mask: 0,
            same_mask: false,
        };
        let text = format!("{track}");
        assert!(text.contains("Track 'Y'"));
        assert!(text.contains("step = 400"));
        assert!(text.contains("layers = M1 M3"));
    }

    #[test]
    fn serde_roundtrip() {
        let track = Track {
            name: "X".into(),
            layers: vec!["M2".into()],
            start: 190,
            step: 380,
            count: 1000,
            first_track_mask: 2,
            same_mask: true,
        };
        let json = serde_json::to_string(&track).unwrap();
        let restored: Track = serde_json::from_str(&json).unwrap();
        assert_eq!(track, restored);
    }
}
