//! Shot resolution pipeline.
//!
//! One shot attempt passes through up to three Bernoulli gates, in order:
//! block, on-target, save. Each gate's probability is a pure function with
//! an explicit clamp, so the stages are unit-testable without an engine.

use crate::engine::tuning::*;
use crate::models::Position;
use rand::Rng;

/// Categorical chance difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotQuality {
    /// Clear look at goal.
    Full,
    /// Contested chance.
    Half,
    /// Low-probability effort from distance.
    LongRange,
}

impl ShotQuality {
    pub fn accuracy_multiplier(&self) -> f32 {
        match self {
            ShotQuality::Full => 1.0,
            ShotQuality::Half => 0.85,
            ShotQuality::LongRange => 0.70,
        }
    }

    fn block_base(&self) -> f64 {
        match self {
            ShotQuality::Full => BLOCK_BASE_FULL,
            ShotQuality::Half => BLOCK_BASE_HALF,
            ShotQuality::LongRange => BLOCK_BASE_LONG,
        }
    }

    fn on_target_base(&self) -> f64 {
        match self {
            ShotQuality::Full => ON_TARGET_BASE_FULL,
            ShotQuality::Half => ON_TARGET_BASE_HALF,
            ShotQuality::LongRange => ON_TARGET_BASE_LONG,
        }
    }

    /// Keeper's task difficulty: clean chances are harder to save, long
    /// range efforts easier.
    fn save_multiplier(&self) -> f64 {
        match self {
            ShotQuality::Full => SAVE_FULL_CHANCE_MULT,
            ShotQuality::Half => 1.0,
            ShotQuality::LongRange => SAVE_LONG_RANGE_MULT,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ShotQuality::Full => "a clear chance",
            ShotQuality::Half => "a half chance",
            ShotQuality::LongRange => "from long range",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrikeType {
    Header,
    LeftFoot,
    RightFoot,
}

impl StrikeType {
    pub fn label(&self) -> &'static str {
        match self {
            StrikeType::Header => "header",
            StrikeType::LeftFoot => "left-footed shot",
            StrikeType::RightFoot => "right-footed shot",
        }
    }
}

/// Ephemeral description of one attempt; lives for a single resolution
/// call.
#[derive(Debug, Clone)]
pub struct ShotContext {
    pub shooter_id: u32,
    pub position: Position,
    pub quality: ShotQuality,
    pub strike: StrikeType,
    pub location: &'static str,
    pub assist_id: Option<u32>,
    pub assist_label: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Goal,
    Saved { keeper_id: u32 },
    Missed,
    Blocked { blocker_id: u32 },
}

/// Everything the pipeline needs about the two sides for one attempt.
/// The numerical-advantage multipliers are applied inside the stage
/// functions, so `shooter_accuracy` is the raw fatigue-adjusted rating.
#[derive(Debug, Clone, Copy)]
pub struct ShotInputs {
    pub quality: ShotQuality,
    pub shooter_accuracy: f32,
    /// Candidate blocker and their defensive ability, if any defender is
    /// on the pitch.
    pub blocker: Option<(u32, f32)>,
    /// Defending keeper: id, position rating, remaining energy 0-100.
    /// `None` only when the defending lineup is empty.
    pub keeper: Option<(u32, f32, f32)>,
    pub attacker_advantage: f32,
    pub defender_advantage: f32,
}

// ============================================================================
// Stage probabilities (pure)
// ============================================================================

pub fn block_chance(quality: ShotQuality, blocker_ability: f32, defender_advantage: f32) -> f64 {
    let raw = quality.block_base()
        * (blocker_ability as f64 / 50.0)
        * defender_advantage as f64;
    raw.min(BLOCK_CHANCE_MAX)
}

pub fn on_target_chance(
    quality: ShotQuality,
    shooter_accuracy: f32,
    attacker_advantage: f32,
) -> f64 {
    let raw = (quality.on_target_base() + (shooter_accuracy as f64 - 50.0) / 200.0)
        * attacker_advantage as f64;
    raw.clamp(0.0, ON_TARGET_MAX)
}

pub fn save_chance(
    quality: ShotQuality,
    gk_rating: f32,
    gk_energy: f32,
    shooter_accuracy: f32,
    defender_advantage: f32,
) -> f64 {
    let fatigue_penalty = 0.85 + 0.15 * gk_energy as f64 / 100.0;
    let mut chance =
        (BASE_SAVE_RATE + (gk_rating as f64 - 50.0) * GK_RATING_SAVE_IMPACT) * fatigue_penalty;
    chance *= quality.save_multiplier();
    chance -= (shooter_accuracy as f64 - 50.0) / 200.0;
    chance *= defender_advantage as f64;
    chance.clamp(SAVE_CHANCE_MIN, SAVE_CHANCE_MAX)
}

// ============================================================================
// Chance quality derivation
// ============================================================================

/// Combine 1-3 co-creator contribution ratings into one chance score.
/// Contributions are ordered best-first and weighted by the fixed splits.
pub fn chance_score(contributions: &[f32]) -> f32 {
    match contributions {
        [] => 0.0,
        [only] => CONTRIBUTION_SPLIT_ONE[0] * only,
        [first, second] => {
            CONTRIBUTION_SPLIT_TWO[0] * first + CONTRIBUTION_SPLIT_TWO[1] * second
        }
        [first, second, third, ..] => {
            CONTRIBUTION_SPLIT_THREE[0] * first
                + CONTRIBUTION_SPLIT_THREE[1] * second
                + CONTRIBUTION_SPLIT_THREE[2] * third
        }
    }
}

/// Roll the quality tier for a chance with the given creation score.
pub fn roll_quality<R: Rng>(rng: &mut R, score: f32) -> ShotQuality {
    let full_threshold = FULL_CHANCE_BASE + score / FULL_CHANCE_SCORE_DIVISOR;
    let half_threshold = HALF_CHANCE_BASE + score / HALF_CHANCE_SCORE_DIVISOR;
    let roll = rng.gen::<f32>() * 100.0;
    if roll < full_threshold {
        ShotQuality::Full
    } else if roll < half_threshold {
        ShotQuality::Half
    } else {
        ShotQuality::LongRange
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Run the block / on-target / save gates for one attempt.
pub fn resolve_shot<R: Rng>(rng: &mut R, inputs: &ShotInputs) -> ShotOutcome {
    // 1. Block.
    if let Some((blocker_id, ability)) = inputs.blocker {
        let chance = block_chance(inputs.quality, ability, inputs.defender_advantage);
        if rng.gen_bool(chance) {
            return ShotOutcome::Blocked { blocker_id };
        }
    }

    // 2. On target.
    let on_target =
        on_target_chance(inputs.quality, inputs.shooter_accuracy, inputs.attacker_advantage);
    if !rng.gen_bool(on_target) {
        return ShotOutcome::Missed;
    }

    // 3. Save. A defending side with nobody left cannot stop the shot.
    let Some((keeper_id, gk_rating, gk_energy)) = inputs.keeper else {
        log::warn!("shot resolved against an empty lineup; defaulting to goal");
        return ShotOutcome::Goal;
    };
    let save = save_chance(
        inputs.quality,
        gk_rating,
        gk_energy,
        inputs.shooter_accuracy,
        inputs.defender_advantage,
    );
    if rng.gen_bool(save) {
        ShotOutcome::Saved { keeper_id }
    } else {
        ShotOutcome::Goal
    }
}
