//! Special (power/ground) net records.

use crate::via::Via;
use sedge_common::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One special net: a net carrying routed shapes directly, typically
/// power or ground.
///
/// Independent of the logical [`Net`](crate::Net) record — a special net
/// owns geometry (rectangles and placed vias) rather than endpoints.
/// Only rectangular shapes are supported.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SpecialNet {
    /// Net name.
    pub name: String,
    /// The DEF `USE` type token (`POWER`, `GROUND`, ...).
    pub net_type: String,
    /// Routed rectangles, in document order.
    pub shapes: Vec<Rect>,
    /// Placed vias, in document order.
    pub vias: Vec<Via>,
}

impl SpecialNet {
    /// Creates a special net in its canonical empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this record to its canonical empty state, clearing shapes
    /// and vias.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for SpecialNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SpecialNet '{}'", self.name)?;
        writeln!(f, "  type = {}", self.net_type)?;
        for via in &self.vias {
            write!(f, "  {via}")?;
        }
        write!(f, "  shapes =")?;
        for shape in &self.shapes {
            write!(f, " {shape}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sedge_common::Point;

    fn sample() -> SpecialNet {
        SpecialNet {
            name: "VDD".into(),
            net_type: "POWER".into(),
            shapes: vec![Rect::new(0, 0, 10000, 200), Rect::new(0, 800, 10000, 1000)],
            vias: vec![Via {
                name: "VIA12".into(),
                location: Point::new(50, 100),
            }],
        }
    }

    #[test]
    fn canonical_default() {
        let snet = SpecialNet::new();
        assert!(snet.name.is_empty());
        assert!(snet.net_type.is_empty());
        assert!(snet.shapes.is_empty());
        assert!(snet.vias.is_empty());
    }

    #[test]
    fn reset_clears_geometry() {
        let mut snet = sample();
        snet.reset();
        assert_eq!(snet, SpecialNet::default());
        snet.reset();
        assert_eq!(snet, SpecialNet::default());
    }

    #[test]
    fn display_lists_shapes_and_vias() {
        let text = format!("{}", sample());
        assert!(text.contains("SpecialNet 'VDD'"));
        assert!(text.contains("type = POWER"));
        assert!(text.contains("Via 'VIA12' at (50, 100)"));
        assert!(text.contains("(0, 0, 10000, 200)"));
    }

    #[test]
    fn serde_roundtrip() {
        let snet = sample();
        let json = serde_json::to_string(&snet).unwrap();
        let restored: SpecialNet = serde_json::from_str(&json).unwrap();
        assert_eq!(snet, restored);
    }
}
