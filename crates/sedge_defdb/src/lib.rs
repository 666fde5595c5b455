//! Event-driven design database for DEF physical-design data.
//!
//! This crate defines the boundary between an external DEF tokenizing
//! engine and arbitrary downstream consumers. The engine discovers
//! constructs (rows, components, pins, nets, special nets, tracks, gcell
//! grids, vias, regions, groups) in document order and pushes each one,
//! fully populated, into a consumer implementing [`DefDatabase`].
//!
//! Three pieces make up the contract:
//!
//! 1. **Entity records** — plain value types, one per construct, each
//!    with a canonical empty state (`Default`/`reset`) and a `Display`
//!    rendering for diagnostics. Records carry no structural logic.
//! 2. **The [`DefDatabase`] trait** — required operations (scalar design
//!    metadata plus the component/pin/net triads, enforced at compile
//!    time) and optional operations with reminder-emitting default
//!    bodies. `resize_*` hints let consumers pre-reserve storage before a
//!    bounded burst of `add_*` calls; million-instance designs make
//!    naive incremental growth expensive.
//! 3. **The dispatch layer** — [`DesignEvent`] and [`replay`], which
//!    forward an ordered event stream into a consumer. Single-threaded,
//!    synchronous, no I/O; concurrent parses each get their own consumer
//!    and dispatch instance.
//!
//! The crate never validates geometry or event-sequence conformance:
//! records are stored as handed over, and a malformed producer is the
//! parse engine's bug, surfaced by its own test harness.
//!
//! # Usage
//!
//! ```
//! use sedge_defdb::{DesignEvent, MemoryDesign, replay};
//! use sedge_common::Rect;
//!
//! let events = vec![
//!     DesignEvent::Version("5.8".into()),
//!     DesignEvent::DesignName("TOP".into()),
//!     DesignEvent::DieArea(Rect::new(0, 0, 1000, 1000)),
//!     DesignEvent::EndDesign,
//! ];
//! let mut db = MemoryDesign::new();
//! replay(&events, &mut db);
//! assert_eq!(db.design_name, "TOP");
//! assert!(db.design_ended);
//! ```

#![warn(missing_docs)]

pub mod component;
pub mod db;
pub mod event;
pub mod gcell;
pub mod group;
pub mod memory;
pub mod net;
pub mod pin;
pub mod region;
pub mod row;
pub mod snet;
pub mod track;
pub mod via;

pub use component::Component;
pub use db::{DefDatabase, REMINDER_CODE, REMINDER_PREFIX};
pub use event::{dispatch, replay, DesignEvent};
pub use gcell::GCellGrid;
pub use group::Group;
pub use memory::{MemoryDesign, RouteBlockage};
pub use net::{Net, NetPin};
pub use pin::{Pin, PinPort};
pub use region::Region;
pub use row::Row;
pub use snet::SpecialNet;
pub use track::Track;
pub use via::{Via, ViaType};
