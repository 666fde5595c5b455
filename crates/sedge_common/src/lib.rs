//! Shared foundational types for the sedge DEF toolchain.
//!
//! This crate provides the coordinate and geometry value types used by the
//! design database, and the DEF orientation token set as a typed enum.
//! All coordinates are signed integers in design-database units; the unit
//! scale factor is declared once per design and is not interpreted here.

#![warn(missing_docs)]

pub mod geom;
pub mod orient;

pub use geom::{Point, Rect};
pub use orient::{Orientation, ParseOrientationError};
