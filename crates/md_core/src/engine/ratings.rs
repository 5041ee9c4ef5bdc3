//! Attribute composite ratings for match simulation.
//!
//! All functions are pure - they take attributes (and, where relevant, an
//! energy level) and return a scalar rating. Inputs are bounded 0-100, so
//! outputs are bounded too; probability clamping happens downstream in the
//! shot pipeline, not here.

use crate::engine::shot::ShotQuality;
use crate::models::{PlayerAttributes, Position};

// ============================================================================
// Discipline
// ============================================================================

/// Foul proneness, centered around 50. Brave, driven players concede more;
/// composed, patient ones concede fewer.
pub fn aggression(a: &PlayerAttributes) -> f32 {
    a.bravery as f32 * 0.30 + a.determination as f32 * 0.25
        - (a.composure as f32 * 0.25 + a.patience as f32 * 0.20)
        + 50.0
}

// ============================================================================
// Attacking
// ============================================================================

/// Scoring-threat weight used when choosing who gets on the end of a move.
/// `position_overall` comes from the position-overall calculator.
pub fn attacking_threat(
    position: Position,
    position_overall: f32,
    a: &PlayerAttributes,
) -> f32 {
    let base = position_overall + a.creativity as f32 * 0.3 + a.top_speed as f32 * 0.2;
    base * position_goal_weight(position) / 2.0
}

/// How often goals flow through each position group.
pub fn position_goal_weight(position: Position) -> f32 {
    match position.to_generic_position() {
        Position::FW => 1.0,
        Position::MF => 0.6,
        Position::DF => 0.25,
        _ => 0.05, // Goalkeeper
    }
}

/// Shooting accuracy for one attempt. `energy` is remaining freshness
/// 0-100; a tired shooter loses up to 20% of the technical blend.
pub fn shooting_accuracy(a: &PlayerAttributes, quality: ShotQuality, energy: f32) -> f32 {
    let technical = a.finishing as f32 * 0.4
        + a.accuracy as f32 * 0.3
        + a.technique as f32 * 0.2
        + a.composure as f32 * 0.1;
    technical * quality.accuracy_multiplier() * (0.8 + 0.2 * energy / 100.0)
}

// ============================================================================
// Defending
// ============================================================================

/// Defensive ability for block/tackle weighting. Fatigue bites harder on
/// defending than on shooting (30% swing vs 20%).
pub fn defensive_ability(a: &PlayerAttributes, energy: f32) -> f32 {
    let blend = a.reactions as f32 * 0.25
        + a.awareness as f32 * 0.25
        + a.bravery as f32 * 0.15
        + a.agility as f32 * 0.15
        + a.jumping as f32 * 0.10
        + a.determination as f32 * 0.10;
    blend * (0.70 + 0.30 * energy / 100.0)
}

// ============================================================================
// Creation
// ============================================================================

/// Chance-creation weight for assister selection.
pub fn playmaking(a: &PlayerAttributes) -> f32 {
    a.creativity as f32 * 0.30
        + a.awareness as f32 * 0.25
        + a.finesse as f32 * 0.20
        + a.composure as f32 * 0.15
        + a.teamwork as f32 * 0.10
}

/// 13-term blend scoring one player's share of a jointly-created chance:
/// physical 25%, mental 40%, technical 35%.
pub fn shot_quality_contribution(a: &PlayerAttributes) -> f32 {
    // Physical (25%)
    let physical = a.top_speed as f32 * 0.08
        + a.acceleration as f32 * 0.07
        + a.strength as f32 * 0.05
        + a.agility as f32 * 0.05;
    // Mental (40%)
    let mental = a.awareness as f32 * 0.12
        + a.creativity as f32 * 0.10
        + a.composure as f32 * 0.08
        + a.patience as f32 * 0.05
        + a.teamwork as f32 * 0.05;
    // Technical (35%)
    let technical = a.finishing as f32 * 0.10
        + a.technique as f32 * 0.10
        + a.finesse as f32 * 0.08
        + a.ball_control as f32 * 0.07;
    physical + mental + technical
}

/// Aerial presence for set-piece target selection.
pub fn aerial_ability(a: &PlayerAttributes) -> f32 {
    a.heading as f32 * 0.5 + a.jumping as f32 * 0.35 + a.strength as f32 * 0.15
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerAttributes;

    #[test]
    fn test_aggression_for_average_player() {
        let avg = PlayerAttributes::uniform(50);
        let agg = aggression(&avg);
        assert!((agg - 55.0).abs() < 1e-3, "average player aggression: {}", agg);
    }

    #[test]
    fn test_aggression_rises_with_bravery_falls_with_composure() {
        let mut hothead = PlayerAttributes::uniform(50);
        hothead.bravery = 90;
        hothead.determination = 90;
        hothead.composure = 20;
        hothead.patience = 20;
        let mut iceman = PlayerAttributes::uniform(50);
        iceman.composure = 95;
        iceman.patience = 90;
        assert!(aggression(&hothead) > aggression(&PlayerAttributes::uniform(50)));
        assert!(aggression(&iceman) < aggression(&PlayerAttributes::uniform(50)));
    }

    #[test]
    fn test_attacking_threat_ordering_by_position() {
        let avg = PlayerAttributes::uniform(50);
        let fw = attacking_threat(Position::ST, 50.0, &avg);
        let mf = attacking_threat(Position::CM, 50.0, &avg);
        let df = attacking_threat(Position::CB, 50.0, &avg);
        let gk = attacking_threat(Position::GK, 50.0, &avg);
        assert!(fw > mf && mf > df && df > gk);
    }

    #[test]
    fn test_shooting_accuracy_quality_and_fatigue() {
        let avg = PlayerAttributes::uniform(50);
        let full = shooting_accuracy(&avg, ShotQuality::Full, 100.0);
        let long = shooting_accuracy(&avg, ShotQuality::LongRange, 100.0);
        let tired = shooting_accuracy(&avg, ShotQuality::Full, 0.0);
        assert!(full > long, "full chance should be easier: {} vs {}", full, long);
        assert!((tired / full - 0.8).abs() < 1e-3, "exhaustion costs 20%");
    }

    #[test]
    fn test_defensive_ability_fatigue_swing() {
        let avg = PlayerAttributes::uniform(50);
        let fresh = defensive_ability(&avg, 100.0);
        let spent = defensive_ability(&avg, 0.0);
        assert!((spent / fresh - 0.70).abs() < 1e-3, "exhaustion costs 30%");
    }

    #[test]
    fn test_shot_quality_contribution_weights_sum_to_one() {
        // A uniform sheet must score exactly the attribute value.
        let contribution = shot_quality_contribution(&PlayerAttributes::uniform(80));
        assert!((contribution - 80.0).abs() < 1e-3, "contribution: {}", contribution);
    }

    #[test]
    fn test_playmaking_rewards_creativity() {
        let mut creator = PlayerAttributes::uniform(50);
        creator.creativity = 95;
        creator.awareness = 90;
        assert!(playmaking(&creator) > playmaking(&PlayerAttributes::uniform(50)));
    }
}
