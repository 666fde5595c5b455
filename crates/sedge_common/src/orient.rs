//! The DEF placement orientation token set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A placement orientation, one of the eight DEF orientation tokens.
///
/// The four cardinal rotations plus their flipped (mirrored) variants.
/// Records that have not been assigned an orientation carry
/// `Option<Orientation>::None` rather than a sentinel token.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Orientation {
    /// North (R0).
    N,
    /// South (R180).
    S,
    /// East (R270).
    E,
    /// West (R90).
    W,
    /// Flipped north (MY).
    FN,
    /// Flipped south (MX).
    FS,
    /// Flipped east (MX90).
    FE,
    /// Flipped west (MY90).
    FW,
}

impl Orientation {
    /// Returns the DEF token for this orientation.
    pub fn token(self) -> &'static str {
        match self {
            Orientation::N => "N",
            Orientation::S => "S",
            Orientation::E => "E",
            Orientation::W => "W",
            Orientation::FN => "FN",
            Orientation::FS => "FS",
            Orientation::FE => "FE",
            Orientation::FW => "FW",
        }
    }

    /// Returns `true` if this is a flipped (mirrored) orientation.
    pub fn is_flipped(self) -> bool {
        matches!(
            self,
            Orientation::FN | Orientation::FS | Orientation::FE | Orientation::FW
        )
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error type for parsing orientation tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid orientation token: '{input}'")]
pub struct ParseOrientationError {
    /// The input string that failed to parse.
    pub input: String,
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Orientation::N),
            "S" => Ok(Orientation::S),
            "E" => Ok(Orientation::E),
            "W" => Ok(Orientation::W),
            "FN" => Ok(Orientation::FN),
            "FS" => Ok(Orientation::FS),
            "FE" => Ok(Orientation::FE),
            "FW" => Ok(Orientation::FW),
            _ => Err(ParseOrientationError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_roundtrip() {
        for orient in [
            Orientation::N,
            Orientation::S,
            Orientation::E,
            Orientation::W,
            Orientation::FN,
            Orientation::FS,
            Orientation::FE,
            Orientation::FW,
        ] {
            assert_eq!(orient.token().parse::<Orientation>(), Ok(orient));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "R90".parse::<Orientation>().unwrap_err();
        assert_eq!(err.input, "R90");
        assert_eq!(format!("{err}"), "invalid orientation token: 'R90'");
    }

    #[test]
    fn parse_is_case_sensitive() {
        // DEF orientation tokens are uppercase; lowercase is not a valid token.
        assert!("fn".parse::<Orientation>().is_err());
    }

    #[test]
    fn flipped() {
        assert!(!Orientation::N.is_flipped());
        assert!(Orientation::FS.is_flipped());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Orientation::FW), "FW");
    }
}
