//! Player position types and utilities.

use crate::error::PeladaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pickup-football player positions.
///
/// The four roles a player can be registered under. Position drives the
/// best-of-position composite score, so this is a closed enum: any
/// position-dependent computation is a total match and a missing arm is a
/// compile error, not a silently skipped player.
///
/// # Examples
///
/// ```rust
/// use pelada::Position;
///
/// let striker = Position::Attacker;
/// assert_eq!(striker.to_string(), "ATK");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "ATK")]
    Attacker,
    #[serde(rename = "MEI")]
    Midfielder,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "GOL")]
    Goalkeeper,
}

impl Position {
    /// The wire/storage code for this position.
    pub fn code(&self) -> &'static str {
        match self {
            Position::Attacker => "ATK",
            Position::Midfielder => "MEI",
            Position::Defender => "DEF",
            Position::Goalkeeper => "GOL",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Position {
    type Err = PeladaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ATK" => Ok(Position::Attacker),
            "MEI" => Ok(Position::Midfielder),
            "DEF" => Ok(Position::Defender),
            "GOL" => Ok(Position::Goalkeeper),
            other => Err(PeladaError::InvalidPosition {
                position: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_codes_round_trip() {
        for pos in [
            Position::Attacker,
            Position::Midfielder,
            Position::Defender,
            Position::Goalkeeper,
        ] {
            assert_eq!(pos.code().parse::<Position>().unwrap(), pos);
        }
    }

    #[test]
    fn test_position_parse_is_case_insensitive() {
        assert_eq!("atk".parse::<Position>().unwrap(), Position::Attacker);
        assert_eq!("Mei".parse::<Position>().unwrap(), Position::Midfielder);
        assert_eq!("gol".parse::<Position>().unwrap(), Position::Goalkeeper);
    }

    #[test]
    fn test_position_parse_rejects_unknown() {
        assert!("CB".parse::<Position>().is_err());
        assert!("".parse::<Position>().is_err());
    }

    #[test]
    fn test_position_serde_uses_wire_codes() {
        let json = serde_json::to_string(&Position::Defender).unwrap();
        assert_eq!(json, "\"DEF\"");
        let back: Position = serde_json::from_str("\"GOL\"").unwrap();
        assert_eq!(back, Position::Goalkeeper);
    }
}
