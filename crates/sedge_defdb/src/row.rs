//! Placement row records.

use sedge_common::{Orientation, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One placement row: a horizontal site template for standard cells.
///
/// Repeat counts and steps are `-1` until the parse engine assigns them,
/// matching the DEF convention that a bare `ROW` statement may omit the
/// `DO ... BY ... STEP ...` clause.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Row name.
    pub name: String,
    /// Site/macro template the row is built from.
    pub macro_name: String,
    /// Origin of the row.
    pub origin: Point,
    /// Placement orientation (`None` until assigned).
    pub orient: Option<Orientation>,
    /// Repeat counts (x, y); `-1` means unset.
    pub repeat: (i32, i32),
    /// Step between sites (x, y); `-1` means unset.
    pub step: (i32, i32),
}

impl Row {
    /// Creates a row in its canonical empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this record to its canonical empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for Row {
    fn default() -> Self {
        Self {
            name: String::new(),
            macro_name: String::new(),
            origin: Point::new(-1, -1),
            orient: None,
            repeat: (-1, -1),
            step: (-1, -1),
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Row '{}'", self.name)?;
        writeln!(f, "  macro = {}", self.macro_name)?;
        writeln!(f, "  origin = {}", self.origin)?;
        match self.orient {
            Some(o) => writeln!(f, "  orient = {o}")?,
            None => writeln!(f, "  orient = <unset>")?,
        }
        writeln!(f, "  repeat = {} {}", self.repeat.0, self.repeat.1)?;
        writeln!(f, "  step = {} {}", self.step.0, self.step.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_default() {
        let row = Row::new();
        assert!(row.name.is_empty());
        assert!(row.macro_name.is_empty());
        assert_eq!(row.origin, Point::new(-1, -1));
        assert_eq!(row.orient, None);
        assert_eq!(row.repeat, (-1, -1));
        assert_eq!(row.step, (-1, -1));
    }

    #[test]
    fn reset_restores_default() {
        let mut row = Row {
            name: "core_row_0".into(),
            macro_name: "CORE".into(),
            origin: Point::new(0, 0),
            orient: Some(Orientation::FS),
            repeat: (100, 1),
            step: (200, 0),
        };
        row.reset();
        assert_eq!(row, Row::default());
        // Idempotent.
        row.reset();
        assert_eq!(row, Row::default());
    }

    #[test]
    fn display_mentions_fields() {
        let row = Row {
            name: "core_row_0".into(),
            macro_name: "CORE".into(),
            origin: Point::new(0, 0),
            orient: Some(Orientation::N),
            repeat: (100, 1),
            step: (200, 0),
        };
        let text = format!("{row}");
        assert!(text.contains("Row 'core_row_0'"));
        assert!(text.contains("macro = CORE"));
        assert!(text.contains("orient = N"));
    }

    #[test]
    fn serde_roundtrip() {
        let row = Row {
            name: "r".into(),
            macro_name: "m".into(),
            origin: Point::new(5, 7),
            orient: Some(Orientation::E),
            repeat: (2, 1),
            step: (10, 0),
        };
        let json = serde_json::to_string(&row).unwrap();
        let restored: Row = serde_json::from_str(&json).unwrap();
        assert_eq!(row, restored);
    }
}
