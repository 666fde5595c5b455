//! Logical net records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One endpoint of a net: an (instance, pin) pair.
///
/// Top-level terminals use the DEF convention of `PIN` as the instance name;
/// the record stores whatever tokens the parse engine hands over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetPin {
    /// Instance name.
    pub instance: String,
    /// Pin name on that instance.
    pub pin: String,
}

impl NetPin {
    /// Creates a net endpoint.
    pub fn new(instance: impl Into<String>, pin: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
            pin: pin.into(),
        }
    }
}

/// One logical signal connection between pins.
///
/// The schema does not require endpoints: an empty net is representable,
/// and the weight defaults to 1. `wirelength` is producer-computed after
/// the fact and is not part of the construction contract.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Net {
    /// Net name.
    pub name: String,
    /// Net weight; defaults to 1.
    pub weight: i32,
    /// Endpoints, in document order.
    pub pins: Vec<NetPin>,
    /// Derived wirelength; 0.0 until the producer computes it.
    pub wirelength: f32,
}

impl Net {
    /// Creates a net in its canonical empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this record to its canonical empty state (weight back to 1,
    /// endpoints cleared).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for Net {
    fn default() -> Self {
        Self {
            name: String::new(),
            weight: 1,
            pins: Vec::new(),
            wirelength: 0.0,
        }
    }
}

impl fmt::Display for Net {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Net '{}'", self.name)?;
        writeln!(f, "  weight = {}", self.weight)?;
        write!(f, "  pins =")?;
        for endpoint in &self.pins {
            write!(f, " ({}, {})", endpoint.instance, endpoint.pin)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_default() {
        let net = Net::new();
        assert!(net.name.is_empty());
        assert_eq!(net.weight, 1);
        assert!(net.pins.is_empty());
        assert_eq!(net.wirelength, 0.0);
    }

    #[test]
    fn reset_restores_weight_one() {
        let mut net = Net {
            name: "clk".into(),
            weight: 10,
            pins: vec![NetPin::new("U1", "A"), NetPin::new("U2", "Y")],
            wirelength: 123.5,
        };
        net.reset();
        assert_eq!(net, Net::default());
        net.reset();
        assert_eq!(net, Net::default());
    }

    #[test]
    fn empty_net_is_representable() {
        let net = Net {
            name: "floating".into(),
            ..Net::default()
        };
        assert!(net.pins.is_empty());
    }

    #[test]
    fn display_lists_endpoints() {
        let net = Net {
            name: "n1".into(),
            pins: vec![NetPin::new("U1", "A"), NetPin::new("PIN", "in0")],
            ..Net::default()
        };
        let text = format!("{net}");
        assert!(text.contains("Net 'n1'"));
        assert!(text.contains("(U1, A)"));
        assert!(text.contains("(PIN, in0)"));
    }

    #[test]
    fn serde_roundtrip() {
        let net = Net {
            name: "n2".into(),
            weight: 3,
            pins: vec![NetPin::new("U7", "Z")],
            wirelength: 42.0,
        };
        let json = serde_json::to_string(&net).unwrap();
        let restored: Net = serde_json::from_str(&json).unwrap();
        assert_eq!(net, restored);
    }
}
