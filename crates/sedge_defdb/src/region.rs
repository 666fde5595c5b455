//! Placement region records.

use sedge_common::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One placement/fence region.
///
/// `property_names`, `property_values`, and `property_types` are parallel
/// arrays: index `i` across the three describes one property. Equal
/// lengths are a producer obligation; the record stores whatever it is
/// given without repairing or rejecting a mismatch.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Region {
    /// Region name.
    pub name: String,
    /// Region type token (`FENCE`, `GUIDE`, ...).
    pub region_type: String,
    /// Region rectangles, in document order.
    pub rects: Vec<Rect>,
    /// Property names, parallel to values and types.
    pub property_names: Vec<String>,
    /// Property values, parallel to names and types.
    pub property_values: Vec<String>,
    /// Property type tags, parallel to names and values.
    pub property_types: Vec<char>,
}

impl Region {
    /// Creates a region in its canonical empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this record to its canonical empty state, clearing the
    /// rectangle and property arrays.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Region '{}'", self.name)?;
        writeln!(f, "  type = {}", self.region_type)?;
        write!(f, "  rects =")?;
        for rect in &self.rects {
            write!(f, " {rect}")?;
        }
        writeln!(f)?;
        for i in 0..self
            .property_names
            .len()
            .min(self.property_values.len())
            .min(self.property_types.len())
        {
            writeln!(
                f,
                "  property {} {} {}",
                self.property_names[i], self.property_types[i], self.property_values[i]
            )?;
        }
        Ok(())
    }
}
