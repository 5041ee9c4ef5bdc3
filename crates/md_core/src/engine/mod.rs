//! Match simulation engine.

pub mod advantage;
pub mod injury;
pub mod match_sim;
pub mod ratings;
pub mod selection;
pub mod shot;
pub mod subs;
pub mod tuning;

pub use advantage::{numerical_advantage, AdvantageModifiers};
pub use injury::{DurabilityInjuries, InjuryTracker};
pub use match_sim::{MatchEngine, MatchPlan};
pub use shot::{ShotOutcome, ShotQuality, StrikeType};
pub use subs::{
    AutoSubstitutions, PlayerCondition, SubDecision, SubState, SubstitutionSystem, MAX_SUBS,
};
