use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// League-average height in inches; set-piece targeting weighs the
/// difference from this baseline.
pub const AVERAGE_HEIGHT_IN: u8 = 70;

/// Player data for the match simulation engine.
///
/// Immutable during a match: fatigue lives in the substitution state and
/// per-match counters live in `PlayerStats`, never here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: Position,
    /// Height in inches. Only the delta from `AVERAGE_HEIGHT_IN` matters.
    #[serde(default = "default_height")]
    pub height_in: u8,
    pub attributes: PlayerAttributes,
}

fn default_height() -> u8 {
    AVERAGE_HEIGHT_IN
}

impl Player {
    pub fn new(id: u32, name: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            height_in: AVERAGE_HEIGHT_IN,
            attributes: PlayerAttributes::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    GK,
    LB,
    CB,
    RB,
    LWB,
    RWB,
    CDM,
    CM,
    CAM,
    LM,
    RM,
    LW,
    RW,
    CF,
    ST,
    // Generic positions
    DF,
    MF,
    FW,
}

impl Position {
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::GK)
    }

    pub fn is_defender(&self) -> bool {
        matches!(
            self,
            Position::LB
                | Position::CB
                | Position::RB
                | Position::LWB
                | Position::RWB
                | Position::DF
        )
    }

    pub fn is_midfielder(&self) -> bool {
        matches!(
            self,
            Position::CDM
                | Position::CM
                | Position::CAM
                | Position::LM
                | Position::RM
                | Position::MF
        )
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, Position::LW | Position::RW | Position::CF | Position::ST | Position::FW)
    }

    /// Collapse a specific position into its generic category.
    pub fn to_generic_position(&self) -> Position {
        match self {
            Position::GK => Position::GK,
            Position::LB | Position::CB | Position::RB | Position::LWB | Position::RWB => {
                Position::DF
            }
            Position::CDM | Position::CM | Position::CAM | Position::LM | Position::RM => {
                Position::MF
            }
            Position::LW | Position::RW | Position::CF | Position::ST => Position::FW,
            Position::DF | Position::MF | Position::FW => *self,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::LB => "LB",
            Position::CB => "CB",
            Position::RB => "RB",
            Position::LWB => "LWB",
            Position::RWB => "RWB",
            Position::CDM => "CDM",
            Position::CM => "CM",
            Position::CAM => "CAM",
            Position::LM => "LM",
            Position::RM => "RM",
            Position::LW => "LW",
            Position::RW => "RW",
            Position::CF => "CF",
            Position::ST => "ST",
            Position::DF => "DF",
            Position::MF => "MF",
            Position::FW => "FW",
        }
    }
}

impl FromStr for Position {
    type Err = crate::error::MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GK" => Ok(Position::GK),
            "LB" => Ok(Position::LB),
            "CB" => Ok(Position::CB),
            "RB" => Ok(Position::RB),
            "LWB" => Ok(Position::LWB),
            "RWB" => Ok(Position::RWB),
            "CDM" => Ok(Position::CDM),
            "CM" => Ok(Position::CM),
            "CAM" => Ok(Position::CAM),
            "LM" => Ok(Position::LM),
            "RM" => Ok(Position::RM),
            "LW" => Ok(Position::LW),
            "RW" => Ok(Position::RW),
            "CF" => Ok(Position::CF),
            "ST" => Ok(Position::ST),
            "DF" => Ok(Position::DF),
            "MF" => Ok(Position::MF),
            "FW" => Ok(Position::FW),
            other => Err(crate::error::MatchError::InvalidPosition(other.to_string())),
        }
    }
}

/// Named 0-100 attributes, grouped physical / mental / technical.
///
/// All rating functions in `engine::ratings` are fixed linear blends of
/// these fields; the default is a fully average (50-rated) player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerAttributes {
    // Physical
    pub strength: u8,
    pub top_speed: u8,
    pub acceleration: u8,
    pub agility: u8,
    pub jumping: u8,
    pub stamina: u8,
    pub durability: u8,

    // Mental
    pub awareness: u8,
    pub composure: u8,
    pub determination: u8,
    pub bravery: u8,
    pub patience: u8,
    pub creativity: u8,
    pub teamwork: u8,
    pub reactions: u8,

    // Technical
    pub finishing: u8,
    pub technique: u8,
    pub finesse: u8,
    pub accuracy: u8,
    pub passing: u8,
    pub tackling: u8,
    pub heading: u8,
    pub ball_control: u8,
}

impl Default for PlayerAttributes {
    fn default() -> Self {
        Self {
            strength: 50,
            top_speed: 50,
            acceleration: 50,
            agility: 50,
            jumping: 50,
            stamina: 50,
            durability: 50,
            awareness: 50,
            composure: 50,
            determination: 50,
            bravery: 50,
            patience: 50,
            creativity: 50,
            teamwork: 50,
            reactions: 50,
            finishing: 50,
            technique: 50,
            finesse: 50,
            accuracy: 50,
            passing: 50,
            tackling: 50,
            heading: 50,
            ball_control: 50,
        }
    }
}

impl PlayerAttributes {
    /// Uniform attribute sheet, handy for tests and demo fixtures.
    pub fn uniform(value: u8) -> Self {
        Self {
            strength: value,
            top_speed: value,
            acceleration: value,
            agility: value,
            jumping: value,
            stamina: value,
            durability: value,
            awareness: value,
            composure: value,
            determination: value,
            bravery: value,
            patience: value,
            creativity: value,
            teamwork: value,
            reactions: value,
            finishing: value,
            technique: value,
            finesse: value,
            accuracy: value,
            passing: value,
            tackling: value,
            heading: value,
            ball_control: value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_categories_are_disjoint() {
        let all = [
            Position::GK,
            Position::LB,
            Position::CB,
            Position::RB,
            Position::LWB,
            Position::RWB,
            Position::CDM,
            Position::CM,
            Position::CAM,
            Position::LM,
            Position::RM,
            Position::LW,
            Position::RW,
            Position::CF,
            Position::ST,
            Position::DF,
            Position::MF,
            Position::FW,
        ];
        for pos in all {
            let categories = [
                pos.is_goalkeeper(),
                pos.is_defender(),
                pos.is_midfielder(),
                pos.is_forward(),
            ];
            assert_eq!(
                categories.iter().filter(|&&c| c).count(),
                1,
                "{:?} should belong to exactly one category",
                pos
            );
        }
    }

    #[test]
    fn test_position_roundtrip_from_str() {
        for code in ["GK", "CB", "CM", "ST", "LWB", "CAM"] {
            let pos: Position = code.parse().unwrap();
            assert_eq!(pos.code(), code);
        }
        assert!("XX".parse::<Position>().is_err());
    }

    #[test]
    fn test_default_attributes_are_average() {
        let attrs = PlayerAttributes::default();
        assert_eq!(attrs, PlayerAttributes::uniform(50));
    }
}
