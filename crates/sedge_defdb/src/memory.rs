//! An in-memory reference consumer.

use crate::component::Component;
use crate::db::DefDatabase;
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
use sedge_diagnostics::DiagnosticSink;

/// A routing blockage: rectangles restricted to one layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteBlockage {
    /// Blockage rectangles.
    pub rects: Vec<Rect>,
    /// Layer the blockage applies to.
    pub layer: String,
}

/// A complete in-memory design database.
///
/// Implements every [`DefDatabase`] operation, required and optional, by
/// copying each transient record into its own `Vec`. Pre-allocation
/// hints are honored with [`Vec::reserve`] and logged in
/// [`resize_hints`](Self::resize_hints) so the test suite can verify the
/// at-most-once-before-adds protocol against a conforming producer.
#[derive(Debug, Default)]
pub struct MemoryDesign {
    /// Hierarchy divider character(s).
    pub divider_char: String,
    /// Bus-bit delimiter characters.
    pub bus_bit_chars: String,
    /// DEF format version.
    pub version: String,
    /// Design name.
    pub design_name: String,
    /// Database distance unit.
    pub unit: i32,
    /// Rectangular die area, if set.
    pub die_area: Option<Rect>,
    /// Non-rectangular die area polygon, if set.
    pub die_area_points: Vec<Point>,
    /// Placement rows, in document order.
    pub rows: Vec<Row>,
    /// Cell instances, in document order.
    pub components: Vec<Component>,
    /// Terminals, in document order.
    pub pins: Vec<Pin>,
    /// Logical nets, in document order.
    pub nets: Vec<Net>,
    /// Routing-track definitions, in document order.
    pub tracks: Vec<Track>,
    /// Gcell-grid definitions, in document order.
    pub gcell_grids: Vec<GCellGrid>,
    /// Special nets, in document order.
    pub special_nets: Vec<SpecialNet>,
    /// Via templates, in document order.
    pub via_types: Vec<ViaType>,
    /// Placement blockages, one rectangle set per event.
    pub placement_blockages: Vec<Vec<Rect>>,
    /// Routing blockages, one per event.
    pub route_blockages: Vec<RouteBlockage>,
    /// Placement regions, in document order.
    pub regions: Vec<Region>,
    /// Instance groups, in document order.
    pub groups: Vec<Group>,
    /// Whether the terminal `end_design` event has been received.
    pub design_ended: bool,
    /// Log of received pre-allocation hints as (collection, count) pairs.
    pub resize_hints: Vec<(&'static str, usize)>,
    /// Diagnostic sink for this consumer.
    pub sink: DiagnosticSink,
}

impl MemoryDesign {
    /// Creates an empty design database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of times a pre-allocation hint was received for
    /// the named collection.
    pub fn hint_count(&self, collection: &str) -> usize {
        self.resize_hints
            .iter()
            .filter(|(name, _)| *name == collection)
            .count()
    }
}

impl DefDatabase for MemoryDesign {
    fn set_divider_char(&mut self, divider: &str) {
        self.divider_char = divider.to_string();
    }

    fn set_bus_bit_chars(&mut self, chars: &str) {
        self.bus_bit_chars = chars.to_string();
    }

    fn set_version(&mut self, version: &str) {
        self.version = version.to_string();
    }

    fn set_design_name(&mut self, name: &str) {
        self.design_name = name.to_string();
    }

    fn set_unit(&mut self, unit: i32) {
        self.unit = unit;
    }

    fn set_die_area(&mut self, area: Rect) {
        self.die_area = Some(area);
    }

    fn add_row(&mut self, row: &Row) {
        self.rows.push(row.clone());
    }

    fn resize_components(&mut self, n: usize) {
        self.resize_hints.push(("components", n));
        self.components.reserve(n);
    }

    fn add_component(&mut self, component: &Component) {
        self.components.push(component.clone());
    }

    fn resize_pins(&mut self, n: usize) {
        self.resize_hints.push(("pins", n));
        self.pins.reserve(n);
    }

    fn add_pin(&mut self, pin: &Pin) {
        self.pins.push(pin.clone());
    }

    fn resize_nets(&mut self, n: usize) {
        self.resize_hints.push(("nets", n));
        self.nets.reserve(n);
    }

    fn add_net(&mut self, net: &Net) {
        self.nets.push(net.clone());
    }

    fn sink(&self) -> &DiagnosticSink {
        &self.sink
    }

    fn set_die_area_points(&mut self, points: &[Point]) {
        self.die_area_points = points.to_vec();
    }

    fn add_track(&mut self, track: &Track) {
        self.tracks.push(track.clone());
    }

    fn add_gcell_grid(&mut self, grid: &GCellGrid) {
        self.gcell_grids.push(grid.clone());
    }

    fn add_special_net(&mut self, snet: &SpecialNet) {
        self.special_nets.push(snet.clone());
    }

    fn add_via(&mut self, via: &ViaType) {
        self.via_types.push(via.clone());
    }

    fn resize_blockages(&mut self, n: usize) {
        self.resize_hints.push(("blockages", n));
        self.placement_blockages.reserve(n);
        self.route_blockages.reserve(n);
    }

    fn add_placement_blockage(&mut self, rects: &[Rect]) {
        self.placement_blockages.push(rects.to_vec());
    }

    fn add_route_blockage(&mut self, rects: &[Rect], layer: &str) {
        self.route_blockages.push(RouteBlockage {
            rects: rects.to_vec(),
            layer: layer.to_string(),
        });
    }

    fn resize_regions(&mut self, n: usize) {
        self.resize_hints.push(("regions", n));
        self.regions.reserve(n);
    }

    fn add_region(&mut self, region: &Region) {
        self.regions.push(region.clone());
    }

    fn resize_groups(&mut self, n: usize) {
        self.resize_hints.push(("groups", n));
        self.groups.reserve(n);
    }

    fn add_group(&mut self, group: &Group) {
        self.groups.push(group.clone());
    }

    fn end_design(&mut self) {
        self.design_ended = true;
    }
}
