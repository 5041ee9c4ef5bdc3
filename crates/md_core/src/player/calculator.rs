//! Position-overall calculation.
//!
//! The engine treats "how good is this player at position X" as a
//! collaborator behind a narrow port: it needs a 0-100 number for
//! goalkeeper rating, attacking threat, and team-strength aggregation,
//! and nothing else.

use crate::models::{Player, Position};

/// Port: position-specific overall rating on a 0-100 scale.
pub trait OverallCalculator {
    fn overall(&self, player: &Player, position: Position) -> f32;
}

/// Default implementation: fixed per-category attribute weights.
///
/// Weights per category sum to 1.0, so a uniform 50-rated player rates
/// exactly 50.0 at every position.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedOverall;

impl OverallCalculator for WeightedOverall {
    fn overall(&self, player: &Player, position: Position) -> f32 {
        let a = &player.attributes;
        match position.to_generic_position() {
            Position::GK => {
                a.reactions as f32 * 0.30
                    + a.agility as f32 * 0.20
                    + a.jumping as f32 * 0.15
                    + a.awareness as f32 * 0.15
                    + a.composure as f32 * 0.10
                    + a.bravery as f32 * 0.10
            }
            Position::DF => {
                a.tackling as f32 * 0.30
                    + a.awareness as f32 * 0.20
                    + a.strength as f32 * 0.15
                    + a.heading as f32 * 0.15
                    + a.reactions as f32 * 0.10
                    + a.determination as f32 * 0.10
            }
            Position::MF => {
                a.passing as f32 * 0.25
                    + a.awareness as f32 * 0.20
                    + a.technique as f32 * 0.15
                    + a.creativity as f32 * 0.15
                    + a.teamwork as f32 * 0.15
                    + a.stamina as f32 * 0.10
            }
            // FW and anything unmapped rates as a forward.
            _ => {
                a.finishing as f32 * 0.30
                    + a.accuracy as f32 * 0.20
                    + a.top_speed as f32 * 0.15
                    + a.technique as f32 * 0.15
                    + a.composure as f32 * 0.10
                    + a.awareness as f32 * 0.10
            }
        }
    }
}
