pub mod events;
pub mod match_result;
pub mod player;
pub mod team;

pub use events::{EventType, InjurySeverity, MatchEvent, SidePair, TeamSide};
pub use match_result::{
    BoxScore, InjuryReport, MatchResult, PenaltyShootoutResult, PlayerStats,
};
pub use player::{Player, PlayerAttributes, Position, AVERAGE_HEIGHT_IN};
pub use team::{Formation, Pressing, TacticalStyle, Team, TeamTactics, STARTERS};
