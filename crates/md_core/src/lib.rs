//! # md_core - Deterministic Football Match Simulation Engine
//!
//! Minute-by-minute probabilistic match simulation: shots, fouls, cards,
//! corners, offsides, substitutions, injuries and penalty shootouts, with
//! a full box score at the end.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same result)
//! - Attribute-driven event probabilities and player selection
//! - Pluggable substitution, injury and rating collaborators
//! - JSON API for easy integration

// Simulation call sites legitimately carry many parameters (sides, actors,
// qualities, advantages).
#![allow(clippy::too_many_arguments)]

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod player;

pub use api::{simulate_match, simulate_match_json, MatchRequest, SCHEMA_VERSION};
pub use engine::{
    AutoSubstitutions, DurabilityInjuries, InjuryTracker, MatchEngine, MatchPlan, SubDecision,
    SubState, SubstitutionSystem,
};
pub use error::{MatchError, Result};
pub use models::{
    BoxScore, EventType, Formation, InjuryReport, InjurySeverity, MatchEvent, MatchResult,
    PenaltyShootoutResult, Player, PlayerAttributes, PlayerStats, Position, SidePair, Team,
    TeamSide, TeamTactics,
};
pub use player::{OverallCalculator, WeightedOverall};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
