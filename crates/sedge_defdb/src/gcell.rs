//! Gcell grid definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One gcell-grid axis definition.
///
/// Same bounds discipline as [`Track`](crate::Track): `count >= 0`, and
/// `step` of 0 only for a degenerate single line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GCellGrid {
    /// Grid name (the axis token, `X` or `Y`).
    pub name: String,
    /// Coordinate of the first grid line.
    pub start: i32,
    /// Spacing between adjacent grid lines.
    pub step: i32,
    /// Number of grid lines.
    pub count: i32,
}

impl GCellGrid {
    /// Creates a gcell grid definition in its canonical empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this record to its canonical empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for GCellGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GCellGrid '{}'", self.name)?;
        writeln!(f, "  start = {}", self.start)?;
        writeln!(f, "  step = {}", self.step)?;
        writeln!(f, "  count = {}", self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_default() {
        let grid = GCellGrid::new();
        assert!(grid.name.is_empty());
        assert_eq!(grid.start, 0);
        assert_eq!(grid.step, 0);
        assert_eq!(grid.count, 0);
    }

    #[test]
    fn reset_restores_default() {
        let mut grid = GCellGrid {
            name: "X".into(),
            start: 0,
            step: 6000,
            count: 100,
        };
        grid.reset();
        assert_eq!(grid, GCellGrid::default());
        grid.reset();
        assert_eq!(grid, GCellGrid::default());
    }

    #[test]
    fn display() {
        let grid = GCellGrid {
            name: "Y".into(),
            start: 10,
            step: 5000,
            count: 80,
        };
        let text = format!("{grid}");
        assert!(text.contains("GCellGrid 'Y'"));
        assert!(text.contains("step = 5000"));
    }

    #[test]
    fn serde_roundtrip() {
        let grid = GCellGrid {
            name: "X".into(),
            start: 0,
            step: 4000,
            count: 120,
        };
        let json = serde_json::to_string(&grid).unwrap();
        let restored: GCellGrid = serde_json::from_str(&json).unwrap();
        assert_eq!(grid, restored);
    }
}
