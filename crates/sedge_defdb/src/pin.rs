//! Pin and pin-port records.

use sedge_common::{Orientation, Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One shape/layer group attached to a pin (a DEF `PORT` clause).
///
/// `layers` and `bboxes` are parallel arrays: `layers[i]` names the layer
/// that `bboxes[i]` sits on. The record does not enforce equal lengths;
/// the parse engine only hands over records populated to valid states.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PinPort {
    /// Placement status token.
    pub status: String,
    /// Offset to the owning pin's origin.
    pub origin: Point,
    /// Placement orientation (`None` until assigned).
    pub orient: Option<Orientation>,
    /// Layer names, parallel to `bboxes`.
    pub layers: Vec<String>,
    /// Bounding box on each layer, parallel to `layers`.
    pub bboxes: Vec<Rect>,
}

impl PinPort {
    /// Creates a pin port in its canonical empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this record to its canonical empty state, clearing the
    /// layer/bbox arrays.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for PinPort {
    fn default() -> Self {
        Self {
            status: String::new(),
            origin: Point::new(-1, -1),
            orient: None,
            layers: Vec::new(),
            bboxes: Vec::new(),
        }
    }
}

impl fmt::Display for PinPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Port")?;
        writeln!(f, "  status = {}", self.status)?;
        writeln!(f, "  origin = {}", self.origin)?;
        match self.orient {
            Some(o) => writeln!(f, "  orient = {o}")?,
            None => writeln!(f, "  orient = <unset>")?,
        }
        for (layer, bbox) in self.layers.iter().zip(self.bboxes.iter()) {
            writeln!(f, "  layer {layer} {bbox}")?;
        }
        Ok(())
    }
}

/// One terminal: an instance pin or a top-level design terminal.
///
/// A pin may carry its own layer/bbox arrays (the flat pre-5.7 form) and
/// zero or more [`PinPort`] sub-records (the `PORT`-clause form). An empty
/// `net_name` means the pin is unconnected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    /// Pin name.
    pub name: String,
    /// Name of the net this pin connects to; empty when unconnected.
    pub net_name: String,
    /// Direction token (`INPUT`, `OUTPUT`, `INOUT`, `FEEDTHRU`).
    pub direction: String,
    /// Placement status token.
    pub status: String,
    /// Offset to the owning node's origin.
    pub origin: Point,
    /// Placement orientation (`None` until assigned).
    pub orient: Option<Orientation>,
    /// Layer names, parallel to `bboxes`.
    pub layers: Vec<String>,
    /// Bounding box on each layer, parallel to `layers`.
    pub bboxes: Vec<Rect>,
    /// The DEF `USE` token (`SIGNAL`, `POWER`, `CLOCK`, ...).
    pub use_type: String,
    /// Pin ports, in document order.
    pub ports: Vec<PinPort>,
}

impl Pin {
    /// Creates a pin in its canonical empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this record to its canonical empty state, clearing the
    /// layer/bbox arrays and all ports.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for Pin {
    fn default() -> Self {
        Self {
            name: String::new(),
            net_name: String::new(),
            direction: String::new(),
            status: String::new(),
            origin: Point::new(-1, -1),
            orient: None,
            layers: Vec::new(),
            bboxes: Vec::new(),
            use_type: String::new(),
            ports: Vec::new(),
        }
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pin '{}'", self.name)?;
        writeln!(f, "  net = {}", self.net_name)?;
        writeln!(f, "  direction = {}", self.direction)?;
        writeln!(f, "  status = {}", self.status)?;
        writeln!(f, "  origin = {}", self.origin)?;
        match self.orient {
            Some(o) => writeln!(f, "  orient = {o}")?,
            None => writeln!(f, "  orient = <unset>")?,
        }
        for (layer, bbox) in self.layers.iter().zip(self.bboxes.iter()) {
            writeln!(f, "  layer {layer} {bbox}")?;
        }
        writeln!(f, "  use = {}", self.use_type)?;
        for port in &self.ports {
            write!(f, "{port}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_port() -> PinPort {
        PinPort {
            status: "PLACED".into(),
            origin: Point::new(5, 5),
            orient: Some(Orientation::N),
            layers: vec!["M1".into(), "M2".into()],
            bboxes: vec![Rect::new(0, 0, 10, 10), Rect::new(0, 0, 20, 20)],
        }
    }

    #[test]
    fn port_canonical_default() {
        let port = PinPort::new();
        assert!(port.status.is_empty());
        assert_eq!(port.origin, Point::new(-1, -1));
        assert_eq!(port.orient, None);
        assert!(port.layers.is_empty());
        assert!(port.bboxes.is_empty());
    }

    #[test]
    fn port_reset_clears_arrays() {
        let mut port = sample_port();
        port.reset();
        assert_eq!(port, PinPort::default());
        port.reset();
        assert_eq!(port, PinPort::default());
    }

    #[test]
    fn pin_canonical_default() {
        let pin = Pin::new();
        assert!(pin.name.is_empty());
        assert!(pin.net_name.is_empty());
        assert!(pin.direction.is_empty());
        assert!(pin.status.is_empty());
        assert_eq!(pin.origin, Point::new(-1, -1));
        assert_eq!(pin.orient, None);
        assert!(pin.layers.is_empty());
        assert!(pin.bboxes.is_empty());
        assert!(pin.use_type.is_empty());
        assert!(pin.ports.is_empty());
    }

    #[test]
    fn pin_reset_clears_nested_ports() {
        let mut pin = Pin {
            name: "clk".into(),
            net_name: "clk_net".into(),
            direction: "INPUT".into(),
            status: "FIXED".into(),
            origin: Point::new(0, 0),
            orient: Some(Orientation::N),
            layers: vec!["M3".into()],
            bboxes: vec![Rect::new(0, 0, 4, 4)],
            use_type: "CLOCK".into(),
            ports: vec![sample_port(), sample_port(), sample_port()],
        };
        pin.reset();
        assert_eq!(pin, Pin::default());
        // No stale trailing elements survive a second population cycle.
        pin.ports.push(sample_port());
        pin.reset();
        assert!(pin.ports.is_empty());
    }

    #[test]
    fn unconnected_pin_is_representable() {
        let pin = Pin {
            name: "nc".into(),
            ..Pin::default()
        };
        assert!(pin.net_name.is_empty());
    }

    #[test]
    fn serde_roundtrip_preserves_ports() {
        let pin = Pin {
            name: "data[0]".into(),
            net_name: "data_bus_0".into(),
            direction: "INOUT".into(),
            status: "PLACED".into(),
            origin: Point::new(100, 200),
            orient: Some(Orientation::FS),
            layers: vec![],
            bboxes: vec![],
            use_type: "SIGNAL".into(),
            ports: vec![sample_port(), sample_port()],
        };
        let json = serde_json::to_string(&pin).unwrap();
        let restored: Pin = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.ports.len(), 2);
        for (a, b) in pin.ports.iter().zip(restored.ports.iter()) {
            assert_eq!(a.layers, b.layers);
            assert_eq!(a.bboxes, b.bboxes);
        }
        assert_eq!(pin, restored);
    }

    #[test]
    fn display_includes_ports() {
        let pin = Pin {
            name: "a".into(),
            ports: vec![sample_port()],
            ..Pin::default()
        };
        let text = format!("{pin}");
        assert!(text.contains("Pin 'a'"));
        assert!(text.contains("Port"));
        assert!(text.contains("layer M1 (0, 0, 10, 10)"));
    }
}
