//! Via placement and via template records.
//!
//! [`ViaType`] names a via template declared in the `VIAS` section;
//! [`Via`] is one placed instance of a template inside a special net's
//! routing. The two records share a shape today but play different roles,
//! so they are kept as distinct types rather than unified.

use sedge_common::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A via template declared by the design.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ViaType {
    /// Template name.
    pub name: String,
    /// Declared location.
    pub location: Point,
}

/// One placed via inside a special net.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Via {
    /// Name of the via template this placement instantiates.
    pub name: String,
    /// Placement location.
    pub location: Point,
}

impl ViaType {
    /// Creates a via template record in its canonical empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this record to its canonical empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Via {
    /// Creates a via record in its canonical empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this record to its canonical empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for ViaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ViaType '{}' at {}", self.name, self.location)
    }
}

impl fmt::Display for Via {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Via '{}' at {}", self.name, self.location)
    }
}
