//! The abstract design-database interface.
//!
//! [`DefDatabase`] is the contract between the external parse engine (the
//! producer) and whatever aggregate storage a consumer maintains. The
//! producer invokes one method per discovered construct, in document
//! order, and hands each record over by reference; the consumer copies
//! out whatever it wants to keep.
//!
//! Methods come in two tiers. Required methods have no default body: a
//! consumer that omits one does not compile, which is how the "effectively
//! every design has components, pins, and nets" contract is enforced.
//! Optional methods cover constructs that vary by design and format
//! version; their default bodies emit a per-call reminder diagnostic and
//! leave all state untouched, so an unimplemented-but-present construct
//! is an observable signal instead of a silent drop.

use crate::component::Component;
use crate::gcell::GCellGrid;
use crate::group::Group;
use crate::net::Net;
use crate::pin::Pin;
use crate::region::Region;
use crate::row::Row;
use crate::snet::SpecialNet;
use crate::track::Track;
use crate::via::ViaType;
use sedge_common::{Point, Rect};
use sedge_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink};

/// Fixed prefix for optional-callback reminder diagnostics.
pub const REMINDER_PREFIX: &str = "callback not implemented: ";

/// Diagnostic code carried by every callback reminder.
pub const REMINDER_CODE: DiagnosticCode = DiagnosticCode {
    category: Category::Callback,
    number: 1,
};

/// The capability set a design-database consumer implements.
///
/// The `resize_*` methods are advisory pre-allocation hints: when the
/// producer knows the eventual element count of a collection it calls
/// `resize_*(n)` at most once, strictly before any matching `add_*`, and
/// then performs exactly `n` adds. A consumer may ignore the hint and
/// grow storage incrementally; the hint's accuracy is the producer's
/// obligation and is not checked here.
///
/// Every `add_*` record is transient: it is owned by the dispatch layer
/// and reused or discarded after the call returns.
pub trait DefDatabase {
    // --- Required: scalar design metadata ---

    /// Sets the hierarchy divider character(s).
    fn set_divider_char(&mut self, divider: &str);

    /// Sets the bus-bit delimiter characters.
    fn set_bus_bit_chars(&mut self, chars: &str);

    /// Sets the DEF format version.
    fn set_version(&mut self, version: &str);

    /// Sets the design name.
    fn set_design_name(&mut self, name: &str);

    /// Sets the database distance unit (database units per micron).
    fn set_unit(&mut self, unit: i32);

    /// Sets the rectangular die area.
    fn set_die_area(&mut self, area: Rect);

    // --- Required: core structural collections ---

    /// Adds one placement row.
    fn add_row(&mut self, row: &Row);

    /// Pre-reserves storage for `n` component additions.
    fn resize_components(&mut self, n: usize);

    /// Adds one fully populated component record.
    fn add_component(&mut self, component: &Component);

    /// Pre-reserves storage for `n` pin additions.
    fn resize_pins(&mut self, n: usize);

    /// Adds one fully populated pin record.
    fn add_pin(&mut self, pin: &Pin);

    /// Pre-reserves storage for `n` net additions.
    fn resize_nets(&mut self, n: usize);

    /// Adds one fully populated net record.
    fn add_net(&mut self, net: &Net);

    /// Returns the diagnostic sink that reminders and other non-fatal
    /// conditions are reported to.
    fn sink(&self) -> &DiagnosticSink;

    // --- Optional: constructs that vary by design and format version ---

    /// Sets a non-rectangular die area as a polygon point list.
    fn set_die_area_points(&mut self, _points: &[Point]) {
        self.callback_reminder("set_die_area_points");
    }

    /// Adds one routing-track definition.
    fn add_track(&mut self, _track: &Track) {
        self.callback_reminder("add_track");
    }

    /// Adds one gcell-grid axis definition.
    fn add_gcell_grid(&mut self, _grid: &GCellGrid) {
        self.callback_reminder("add_gcell_grid");
    }

    /// Adds one special (power/ground) net.
    fn add_special_net(&mut self, _snet: &SpecialNet) {
        self.callback_reminder("add_special_net");
    }

    /// Adds one via template.
    fn add_via(&mut self, _via: &ViaType) {
        self.callback_reminder("add_via");
    }

    /// Pre-reserves storage for `n` blockage additions.
    fn resize_blockages(&mut self, _n: usize) {
        self.callback_reminder("resize_blockages");
    }

    /// Adds one placement blockage as a set of rectangles.
    fn add_placement_blockage(&mut self, _rects: &[Rect]) {
        self.callback_reminder("add_placement_blockage");
    }

    /// Adds one routing blockage as a set of rectangles on a layer.
    fn add_route_blockage(&mut self, _rects: &[Rect], _layer: &str) {
        self.callback_reminder("add_route_blockage");
    }

    /// Pre-reserves storage for `n` region additions.
    fn resize_regions(&mut self, _n: usize) {
        self.callback_reminder("resize_regions");
    }

    /// Adds one placement region.
    fn add_region(&mut self, _region: &Region) {
        self.callback_reminder("add_region");
    }

    /// Pre-reserves storage for `n` group additions.
    fn resize_groups(&mut self, _n: usize) {
        self.callback_reminder("resize_groups");
    }

    /// Adds one instance group.
    fn add_group(&mut self, _group: &Group) {
        self.callback_reminder("add_group");
    }

    /// Terminal hook: the producer issues no further calls after this.
    fn end_design(&mut self) {
        self.callback_reminder("end_design");
    }

    // --- Reminder mechanism ---

    /// Emits one reminder diagnostic naming an optional operation that was
    /// reached without an override.
    ///
    /// Emitted once per invocation, never deduplicated: repeated events on
    /// an unimplemented capability each produce their own reminder. Never
    /// panics and never mutates consumer state.
    fn callback_reminder(&self, operation: &str) {
        self.sink().emit(Diagnostic::warning(
            REMINDER_CODE,
            format!("{REMINDER_PREFIX}{operation}"),
        ));
    }
}
