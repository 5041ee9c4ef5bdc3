use super::Player;
use crate::error::MatchError;
use serde::{Deserialize, Serialize};

/// Minimum playable roster: 11 starters. Bench players beyond that are
/// available to the substitution system.
pub const STARTERS: usize = 11;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub formation: Formation,
    /// Starters first (index 0..11), then bench.
    pub players: Vec<Player>,
    #[serde(default)]
    pub tactics: TeamTactics,
}

impl Team {
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.players.len() < STARTERS {
            return Err(MatchError::InvalidTeamSize {
                expected: STARTERS,
                found: self.players.len(),
            });
        }

        let starting_gks =
            self.players[..STARTERS].iter().filter(|p| p.position.is_goalkeeper()).count();
        if starting_gks != 1 {
            return Err(MatchError::MissingGoalkeeper(self.name.clone()));
        }

        Ok(())
    }

    pub fn starters(&self) -> &[Player] {
        &self.players[..STARTERS.min(self.players.len())]
    }

    pub fn bench(&self) -> &[Player] {
        if self.players.len() > STARTERS {
            &self.players[STARTERS..]
        } else {
            &[]
        }
    }

    pub fn player(&self, player_id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Formation {
    #[serde(rename = "4-4-2")]
    F442,
    #[serde(rename = "4-3-3")]
    F433,
    #[serde(rename = "4-5-1")]
    F451,
    #[serde(rename = "3-5-2")]
    F352,
    #[serde(rename = "5-3-2")]
    F532,
    #[serde(rename = "4-2-3-1")]
    F4231,
}

impl Formation {
    /// Returns (defenders, midfielders, forwards).
    pub fn get_positions(&self) -> (u8, u8, u8) {
        match self {
            Formation::F442 => (4, 4, 2),
            Formation::F433 => (4, 3, 3),
            Formation::F451 => (4, 5, 1),
            Formation::F352 => (3, 5, 2),
            Formation::F532 => (5, 3, 2),
            Formation::F4231 => (4, 5, 1), // 2 DM + 3 AM counted as midfielders
        }
    }

    /// Canonical formation code string (e.g., "4-4-2").
    pub fn code(&self) -> &'static str {
        match self {
            Formation::F442 => "4-4-2",
            Formation::F433 => "4-3-3",
            Formation::F451 => "4-5-1",
            Formation::F352 => "3-5-2",
            Formation::F532 => "5-3-2",
            Formation::F4231 => "4-2-3-1",
        }
    }

    pub fn parse(code: &str) -> Result<Self, MatchError> {
        match code {
            "4-4-2" => Ok(Formation::F442),
            "4-3-3" => Ok(Formation::F433),
            "4-5-1" => Ok(Formation::F451),
            "3-5-2" => Ok(Formation::F352),
            "5-3-2" => Ok(Formation::F532),
            "4-2-3-1" => Ok(Formation::F4231),
            other => Err(MatchError::InvalidFormation(other.to_string())),
        }
    }
}

/// Tactical settings consumed by the possession model. Produced upstream
/// (AI or user choice); the engine only reads them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TeamTactics {
    #[serde(default)]
    pub style: TacticalStyle,
    #[serde(default)]
    pub pressing: Pressing,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TacticalStyle {
    #[default]
    Balanced,
    Attacking,
    Defensive,
    Possession,
    Counter,
}

impl TacticalStyle {
    /// Possession percentage-point delta contributed by the style.
    pub fn possession_delta(&self) -> f32 {
        match self {
            TacticalStyle::Balanced => 0.0,
            TacticalStyle::Attacking => 2.0,
            TacticalStyle::Defensive => -3.0,
            TacticalStyle::Possession => 5.0,
            TacticalStyle::Counter => -4.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Pressing {
    Low,
    #[default]
    Standard,
    High,
}

impl Pressing {
    /// Possession percentage-point delta contributed by pressing intensity.
    pub fn possession_delta(&self) -> f32 {
        match self {
            Pressing::Low => -2.0,
            Pressing::Standard => 0.0,
            Pressing::High => 3.0,
        }
    }

    /// High pressing burns fatigue faster.
    pub fn fatigue_factor(&self) -> f32 {
        match self {
            Pressing::Low => 0.9,
            Pressing::Standard => 1.0,
            Pressing::High => 1.15,
        }
    }
}
