use serde::{Deserialize, Serialize};

/// Side identity for everything per-team in a match. Used as an index into
/// `[T; 2]` pairs instead of string-keyed field lookup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub const BOTH: [TeamSide; 2] = [TeamSide::Home, TeamSide::Away];

    pub fn other(&self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TeamSide::Home => 0,
            TeamSide::Away => 1,
        }
    }
}

/// A pair of values indexed by `TeamSide`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SidePair<T>(pub [T; 2]);

impl<T> SidePair<T> {
    pub fn new(home: T, away: T) -> Self {
        SidePair([home, away])
    }

    pub fn get(&self, side: TeamSide) -> &T {
        &self.0[side.index()]
    }

    pub fn get_mut(&mut self, side: TeamSide) -> &mut T {
        &mut self.0[side.index()]
    }

    pub fn home(&self) -> &T {
        &self.0[0]
    }

    pub fn away(&self) -> &T {
        &self.0[1]
    }
}

impl<T> std::ops::Index<TeamSide> for SidePair<T> {
    type Output = T;

    fn index(&self, side: TeamSide) -> &T {
        self.get(side)
    }
}

impl<T> std::ops::IndexMut<TeamSide> for SidePair<T> {
    fn index_mut(&mut self, side: TeamSide) -> &mut T {
        self.get_mut(side)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    KickOff,
    Goal,
    /// Saved by the keeper.
    ShotOnTarget,
    ShotOffTarget,
    ShotBlocked,
    Foul,
    YellowCard,
    RedCard,
    Corner,
    Offside,
    Substitution,
    InjuryDelay,
    PlayResumes,
    HalfTime,
    FullTime,
    PenaltyScored,
    PenaltyMissed,
}

impl EventType {
    /// Shot attempts counted in the box score.
    pub fn is_shot(&self) -> bool {
        matches!(
            self,
            EventType::Goal
                | EventType::ShotOnTarget
                | EventType::ShotOffTarget
                | EventType::ShotBlocked
        )
    }

    /// Shots on target (goals and saves).
    pub fn is_shot_on_target(&self) -> bool {
        matches!(self, EventType::Goal | EventType::ShotOnTarget)
    }
}

/// Severity of an in-match injury, as reported by the injury tracker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InjurySeverity {
    /// Shaken off after a short delay.
    Momentary,
    /// Leaves the match, recovers before the next one.
    Temporary,
    /// Leaves the match and carries the injury beyond it.
    GameEnding,
}

impl InjurySeverity {
    /// Extra stoppage minutes the delay adds.
    pub fn stoppage_minutes(&self) -> u16 {
        match self {
            InjurySeverity::Momentary => 1,
            InjurySeverity::Temporary => 2,
            InjurySeverity::GameEnding => 3,
        }
    }

    /// Whether the player must leave the pitch.
    pub fn forces_removal(&self) -> bool {
        !matches!(self, InjurySeverity::Momentary)
    }
}

/// Immutable record of one match occurrence. Created once, appended to the
/// event list, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEvent {
    pub minute: u16,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub side: TeamSide,
    /// Primary actor (scorer, fouler, carded player, player going off, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<u32>,
    /// Secondary actor (assister, foul victim, player coming on, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assist_id: Option<u32>,
    /// Human-readable description; accompanies every event.
    pub description: String,
}

impl MatchEvent {
    pub fn new(
        minute: u16,
        event_type: EventType,
        side: TeamSide,
        player_id: Option<u32>,
        assist_id: Option<u32>,
        description: impl Into<String>,
    ) -> Self {
        Self { minute, event_type, side, player_id, assist_id, description: description.into() }
    }
}
