//! Cell instance records.

use sedge_common::{Orientation, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One cell instance placed (or to be placed) in the design.
///
/// Name and macro name are non-empty once a record is handed to the
/// consumer; the placement status token (`PLACED`, `FIXED`, `UNPLACED`,
/// `COVER`) is kept as a string because DEF revisions extend the set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Instance name.
    pub name: String,
    /// Macro (standard-cell template) name.
    pub macro_name: String,
    /// Placement status token.
    pub status: String,
    /// Placement origin.
    pub origin: Point,
    /// Placement orientation (`None` until assigned).
    pub orient: Option<Orientation>,
}

impl Component {
    /// Creates a component in its canonical empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this record to its canonical empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for Component {
    fn default() -> Self {
        Self {
            name: String::new(),
            macro_name: String::new(),
            status: String::new(),
            origin: Point::new(-1, -1),
            orient: None,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Component '{}'", self.name)?;
        writeln!(f, "  macro = {}", self.macro_name)?;
        writeln!(f, "  status = {}", self.status)?;
        writeln!(f, "  origin = {}", self.origin)?;
        match self.orient {
            Some(o) => writeln!(f, "  orient = {o}"),
            None => writeln!(f, "  orient = <unset>"),
        }
    }
}
