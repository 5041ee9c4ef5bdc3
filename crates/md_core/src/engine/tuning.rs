//! Calibration constants for the match engine.
//!
//! These values are empirically tuned design parameters, not derived
//! quantities. They are collected here so a rebalance touches one file.

/// Minutes of regulation play per half.
pub const HALF_MINUTES: u16 = 45;
/// Substitution check windows during open play (half-time is checked
/// separately with the break flag set).
pub const SUB_WINDOWS: [u16; 4] = [55, 65, 75, 85];

// ---------------------------------------------------------------------------
// Per-minute event model
// ---------------------------------------------------------------------------

/// Chance that any event fires in a given minute.
pub const EVENT_CHANCE_PER_MINUTE: f64 = 0.38;
/// Event-type distribution, conditional on an event firing.
pub const EVENT_SHARE_SHOT: f64 = 0.25;
pub const EVENT_SHARE_FOUL: f64 = 0.30;
pub const EVENT_SHARE_OFFSIDE: f64 = 0.10;
pub const EVENT_SHARE_CORNER: f64 = 0.15;
// Remaining 0.20: the minute passes without an event.

// ---------------------------------------------------------------------------
// Possession
// ---------------------------------------------------------------------------

/// Percentage points of possession per team-strength rating point of
/// difference.
pub const POSSESSION_PER_STRENGTH_POINT: f32 = 0.45;
/// Possession share is clamped to this window regardless of modifiers.
pub const POSSESSION_MIN: f32 = 25.0;
pub const POSSESSION_MAX: f32 = 75.0;

// ---------------------------------------------------------------------------
// Numerical advantage (red cards)
// ---------------------------------------------------------------------------

/// Percentage points of possession per active-player difference.
pub const POSSESSION_PER_PLAYER: f32 = 7.0;
pub const ATTACK_PER_PLAYER: f32 = 0.12;
pub const DEFENSE_PER_PLAYER: f32 = 0.15;
/// Applied only to the short-handed side.
pub const FATIGUE_PER_PLAYER: f32 = 0.25;

// ---------------------------------------------------------------------------
// Fouls and cards
// ---------------------------------------------------------------------------

pub const CARD_CHANCE_BASE: f64 = 0.14;
/// Card chance moves by (aggression - 50) / this.
pub const CARD_AGGRESSION_DIVISOR: f64 = 300.0;
pub const STRAIGHT_RED_CHANCE: f64 = 0.02;
/// Chance the foul is conceded in the victim's attacking half.
pub const FOUL_ATTACKING_HALF_CHANCE: f64 = 0.45;
/// Chance an attacking-half free kick produces a set-piece shot.
pub const FREE_KICK_SHOT_CHANCE: f64 = 0.15;
/// Card chance is clamped to this window after the aggression adjustment.
pub const CARD_CHANCE_MIN: f64 = 0.02;
pub const CARD_CHANCE_MAX: f64 = 0.50;

// ---------------------------------------------------------------------------
// Shots
// ---------------------------------------------------------------------------

/// Strike-type mix for open-play shots.
pub const HEADER_CHANCE: f64 = 0.15;
pub const LEFT_FOOT_CHANCE: f64 = 0.15;
/// Chance a non-header open-play shot is assisted.
pub const ASSIST_CHANCE: f64 = 0.70;
/// Chance a blocked shot deflects out for a corner.
pub const BLOCKED_SHOT_CORNER_CHANCE: f64 = 0.40;

/// Chance-quality thresholds roll against d100:
/// full chance below `15 + score/5`, half chance below `50 + score/4`.
pub const FULL_CHANCE_BASE: f32 = 15.0;
pub const FULL_CHANCE_SCORE_DIVISOR: f32 = 5.0;
pub const HALF_CHANCE_BASE: f32 = 50.0;
pub const HALF_CHANCE_SCORE_DIVISOR: f32 = 4.0;

/// Weight split between joint chance creators, by creator count.
pub const CONTRIBUTION_SPLIT_ONE: [f32; 1] = [1.0];
pub const CONTRIBUTION_SPLIT_TWO: [f32; 2] = [0.6, 0.4];
pub const CONTRIBUTION_SPLIT_THREE: [f32; 3] = [0.5, 0.3, 0.2];

// Block stage.
pub const BLOCK_BASE_FULL: f64 = 0.08;
pub const BLOCK_BASE_HALF: f64 = 0.15;
pub const BLOCK_BASE_LONG: f64 = 0.25;
pub const BLOCK_CHANCE_MAX: f64 = 0.40;

// On-target stage.
pub const ON_TARGET_BASE_FULL: f64 = 0.65;
pub const ON_TARGET_BASE_HALF: f64 = 0.45;
pub const ON_TARGET_BASE_LONG: f64 = 0.30;
pub const ON_TARGET_MAX: f64 = 0.90;

// Save stage.
pub const BASE_SAVE_RATE: f64 = 0.72;
pub const GK_RATING_SAVE_IMPACT: f64 = 0.004;
pub const SAVE_FULL_CHANCE_MULT: f64 = 0.70;
pub const SAVE_LONG_RANGE_MULT: f64 = 1.25;
pub const SAVE_CHANCE_MIN: f64 = 0.15;
pub const SAVE_CHANCE_MAX: f64 = 0.85;

// ---------------------------------------------------------------------------
// Set pieces
// ---------------------------------------------------------------------------

/// Chance a corner produces a set-piece shot.
pub const CORNER_SHOT_CHANCE: f64 = 0.22;
/// Share of set-piece shots that are headers.
pub const SET_PIECE_HEADER_CHANCE: f64 = 0.70;
/// Target weight bonus per inch of height above the league average.
pub const HEIGHT_WEIGHT_PER_INCH: f32 = 0.015;

// ---------------------------------------------------------------------------
// Selection variance
// ---------------------------------------------------------------------------

/// Selection weights are jittered into `[VARIANCE_FLOOR * w, w]` so the
/// highest-rated candidate does not win every draw.
pub const VARIANCE_FLOOR: f32 = 0.3;

// ---------------------------------------------------------------------------
// Fatigue
// ---------------------------------------------------------------------------

/// Base energy drain per simulated minute (0-100 scale).
pub const FATIGUE_PER_MINUTE: f32 = 0.55;
/// Extra drain factor for the side chasing the ball.
pub const FATIGUE_OFF_POSSESSION_FACTOR: f32 = 1.15;

// ---------------------------------------------------------------------------
// Stoppage time
// ---------------------------------------------------------------------------

pub const STOPPAGE_BASE_FIRST_HALF: u16 = 1;
pub const STOPPAGE_BASE_SECOND_HALF: u16 = 3;
pub const STOPPAGE_MAX: u16 = 6;

// ---------------------------------------------------------------------------
// Penalty shootout
// ---------------------------------------------------------------------------

pub const PENALTY_BASE_CONVERSION: f64 = 0.75;
pub const PENALTY_COMPOSURE_DIVISOR: f64 = 500.0;
pub const PENALTY_ACCURACY_DIVISOR: f64 = 833.0;
pub const PENALTY_TECHNIQUE_DIVISOR: f64 = 1250.0;
pub const PENALTY_GK_DIVISOR: f64 = 400.0;
pub const PENALTY_CONVERSION_MIN: f64 = 0.50;
pub const PENALTY_CONVERSION_MAX: f64 = 0.90;
pub const SHOOTOUT_REGULATION_ROUNDS: usize = 5;
pub const SHOOTOUT_SUDDEN_DEATH_CAP: usize = 20;
