//! Structural events and the dispatch layer.
//!
//! The external parse engine emits one [`DesignEvent`] per discovered
//! construct, in document order. [`replay`] forwards a recorded event
//! stream into a [`DefDatabase`] consumer, which is also how the test
//! suite stands in for the parse engine. Events are serde-derived so
//! fixture streams can be stored as JSON.

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
use serde::{Deserialize, Serialize};

/// One structural event: a scalar metadata item, a pre-allocation hint,
/// or a fully populated record.
///
/// Each variant corresponds to exactly one [`DefDatabase`] operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DesignEvent {
    /// Hierarchy divider character(s).
    DividerChar(String),
    /// Bus-bit delimiter characters.
    BusBitChars(String),
    /// DEF format version.
    Version(String),
    /// Design name.
    DesignName(String),
    /// Database distance unit.
    Unit(i32),
    /// Rectangular die area.
    DieArea(Rect),
    /// Non-rectangular die area as a polygon point list.
    DieAreaPoints(Vec<Point>),
    /// One placement row.
    Row(Row),
    /// Pre-allocation hint for components.
    ResizeComponents(usize),
    /// One cell instance.
    Component(Component),
    /// Pre-allocation hint for pins.
    ResizePins(usize),
    /// One terminal.
    Pin(Pin),
    /// Pre-allocation hint for nets.
    ResizeNets(usize),
    /// One logical net.
    Net(Net),
    /// One routing-track definition.
    Track(Track),
    /// One gcell-grid axis definition.
    GCellGrid(GCellGrid),
    /// One special (power/ground) net.
    SpecialNet(SpecialNet),
    /// One via template.
    Via(ViaType),
    /// Pre-allocation hint for blockages.
    ResizeBlockages(usize),
    /// One placement blockage.
    PlacementBlockage(Vec<Rect>),
    /// One routing blockage on a layer.
    RouteBlockage {
        /// Blockage rectangles.
        rects: Vec<Rect>,
        /// Layer the blockage applies to.
        layer: String,
    },
    /// Pre-allocation hint for regions.
    ResizeRegions(usize),
    /// One placement region.
    Region(Region),
    /// Pre-allocation hint for groups.
    ResizeGroups(usize),
    /// One instance group.
    Group(Group),
    /// Terminal event; the producer emits nothing after this.
    EndDesign,
}

impl DesignEvent {
    /// Returns the name of the [`DefDatabase`] operation this event
    /// dispatches to — the same string an optional-callback reminder
    /// carries.
    pub fn operation_name(&self) -> &'static str {
        match self {
            DesignEvent::DividerChar(_) => "set_divider_char",
            DesignEvent::BusBitChars(_) => "set_bus_bit_chars",
            DesignEvent::Version(_) => "set_version",
            DesignEvent::DesignName(_) => "set_design_name",
            DesignEvent::Unit(_) => "set_unit",
            DesignEvent::DieArea(_) => "set_die_area",
            DesignEvent::DieAreaPoints(_) => "set_die_area_points",
            DesignEvent::Row(_) => "add_row",
            DesignEvent::ResizeComponents(_) => "resize_components",
            DesignEvent::Component(_) => "add_component",
            DesignEvent::ResizePins(_) => "resize_pins",
            DesignEvent::Pin(_) => "add_pin",
            DesignEvent::ResizeNets(_) => "resize_nets",
            DesignEvent::Net(_) => "add_net",
            DesignEvent::Track(_) => "add_track",
            DesignEvent::GCellGrid(_) => "add_gcell_grid",
            DesignEvent::SpecialNet(_) => "add_special_net",
            DesignEvent::Via(_) => "add_via",
            DesignEvent::ResizeBlockages(_) => "resize_blockages",
            DesignEvent::PlacementBlockage(_) => "add_placement_blockage",
            DesignEvent::RouteBlockage { .. } => "add_route_blockage",
            DesignEvent::ResizeRegions(_) => "resize_regions",
            DesignEvent::Region(_) => "add_region",
            DesignEvent::ResizeGroups(_) => "resize_groups",
            DesignEvent::Group(_) => "add_group",
            DesignEvent::EndDesign => "end_design",
        }
    }
}

/// Forwards one event to the corresponding consumer operation.
///
/// Records are passed by reference; the consumer copies out anything it
/// retains. The dispatch layer owns nothing after the call returns.
pub fn dispatch(event: &DesignEvent, db: &mut dyn DefDatabase) {
    match event {
        DesignEvent::DividerChar(divider) => db.set_divider_char(divider),
        DesignEvent::BusBitChars(chars) => db.set_bus_bit_chars(chars),
        DesignEvent::Version(version) => db.set_version(version),
        DesignEvent::DesignName(name) => db.set_design_name(name),
        DesignEvent::Unit(unit) => db.set_unit(*unit),
        DesignEvent::DieArea(area) => db.set_die_area(*area),
        DesignEvent::DieAreaPoints(points) => db.set_die_area_points(points),
        DesignEvent::Row(row) => db.add_row(row),
        DesignEvent::ResizeComponents(n) => db.resize_components(*n),
        DesignEvent::Component(component) => db.add_component(component),
        DesignEvent::ResizePins(n) => db.resize_pins(*n),
        DesignEvent::Pin(pin) => db.add_pin(pin),
        DesignEvent::ResizeNets(n) => db.resize_nets(*n),
        DesignEvent::Net(net) => db.add_net(net),
        DesignEvent::Track(track) => db.add_track(track),
        DesignEvent::GCellGrid(grid) => db.add_gcell_grid(grid),
        DesignEvent::SpecialNet(snet) => db.add_special_net(snet),
        DesignEvent::Via(via) => db.add_via(via),
        DesignEvent::ResizeBlockages(n) => db.resize_blockages(*n),
        DesignEvent::PlacementBlockage(rects) => db.add_placement_blockage(rects),
        DesignEvent::RouteBlockage { rects, layer } => db.add_route_blockage(rects, layer),
        DesignEvent::ResizeRegions(n) => db.resize_regions(*n),
        DesignEvent::Region(region) => db.add_region(region),
        DesignEvent::ResizeGroups(n) => db.resize_groups(*n),
        DesignEvent::Group(group) => db.add_group(group),
        DesignEvent::EndDesign => db.end_design(),
    }
}

/// Replays a recorded event stream into a consumer, in order.
///
/// Purely synchronous and single-threaded: each call completes before the
/// next begins. The replayer does not police producer conformance — it
/// forwards whatever it is given, including events after [`DesignEvent::EndDesign`].
/// Conformance of a real producer is a property of the parse engine, not
/// of this layer.
pub fn replay(events: &[DesignEvent], db: &mut dyn DefDatabase) {
    for event in events {
        dispatch(event, db);
    }
}
