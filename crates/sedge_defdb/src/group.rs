//! Instance group records.

use sedge_common::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One named set of instances bound to a region.
///
/// Carries the same parallel property-array discipline as
/// [`Region`](crate::Region): index `i` across names, values, and type
/// tags describes one property, and equal lengths are the producer's
/// obligation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Group {
    /// Group name.
    pub name: String,
    /// Member instance names, in document order.
    pub members: Vec<String>,
    /// Name of the region this group is bound to.
    pub region_name: String,
    /// The DEF `MAXHALFPERIMETER` constraint value.
    pub perimeter: i32,
    /// The DEF `MAXX` constraint value.
    pub max_x: i32,
    /// The DEF `MAXY` constraint value.
    pub max_y: i32,
    /// Group rectangles, in document order.
    pub rects: Vec<Rect>,
    /// Property names, parallel to values and types.
    pub property_names: Vec<String>,
    /// Property values, parallel to names and types.
    pub property_values: Vec<String>,
    /// Property type tags, parallel to names and values.
    pub property_types: Vec<char>,
}

impl Group {
    /// Creates a group in its canonical empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this record to its canonical empty state, clearing members,
    /// rectangles, and property arrays.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Group '{}'", self.name)?;
        writeln!(f, "  region = {}", self.region_name)?;
        writeln!(f, "  perimeter = {}", self.perimeter)?;
        writeln!(f, "  maxx = {}, maxy = {}", self.max_x, self.max_y)?;
        write!(f, "  members[{}] =", self.members.len())?;
        for member in &self.members {
            write!(f, " {member}")?;
        }
        writeln!(f)?;
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
