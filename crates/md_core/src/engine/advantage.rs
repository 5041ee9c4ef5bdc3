//! Numerical advantage from dismissals.
//!
//! Recomputed every minute from the active (non-dismissed) player counts;
//! the multipliers enter the possession, shot, and fatigue formulas
//! multiplicatively.

use crate::engine::tuning::{
    ATTACK_PER_PLAYER, DEFENSE_PER_PLAYER, FATIGUE_PER_PLAYER, POSSESSION_PER_PLAYER,
};

/// Modifiers for one side given the current player counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdvantageModifiers {
    /// Possession delta in percentage points (signed).
    pub possession: f32,
    pub attack: f32,
    pub defense: f32,
    /// Only ever > 1.0 for the short-handed side.
    pub fatigue: f32,
}

impl AdvantageModifiers {
    pub const NEUTRAL: AdvantageModifiers =
        AdvantageModifiers { possession: 0.0, attack: 1.0, defense: 1.0, fatigue: 1.0 };
}

/// Compute one side's modifiers from `my_count` active players vs
/// `opp_count`. Equal counts are exactly neutral.
pub fn numerical_advantage(my_count: u8, opp_count: u8) -> AdvantageModifiers {
    let diff = my_count as i32 - opp_count as i32;
    if diff == 0 {
        return AdvantageModifiers::NEUTRAL;
    }

    let magnitude = diff.unsigned_abs() as f32;
    let attack = if diff > 0 {
        1.0 + diff as f32 * ATTACK_PER_PLAYER
    } else {
        1.0 / (1.0 + magnitude * ATTACK_PER_PLAYER)
    };
    let defense = if diff > 0 {
        1.0 + diff as f32 * DEFENSE_PER_PLAYER
    } else {
        1.0 / (1.0 + magnitude * DEFENSE_PER_PLAYER)
    };
    let fatigue = if diff < 0 { 1.0 + magnitude * FATIGUE_PER_PLAYER } else { 1.0 };

    AdvantageModifiers {
        possession: diff as f32 * POSSESSION_PER_PLAYER,
        attack,
        defense,
        fatigue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_counts_are_exactly_neutral() {
        for count in [11u8, 10, 9, 7] {
            let mods = numerical_advantage(count, count);
            assert_eq!(mods, AdvantageModifiers::NEUTRAL);
        }
    }

    #[test]
    fn test_one_man_advantage() {
        let mods = numerical_advantage(11, 10);
        assert!((mods.possession - 7.0).abs() < 1e-6);
        assert!((mods.attack - 1.12).abs() < 1e-6);
        assert!((mods.defense - 1.15).abs() < 1e-6);
        assert_eq!(mods.fatigue, 1.0, "the full-strength side does not tire faster");
    }

    #[test]
    fn test_short_handed_side_mirrors_reciprocally() {
        let up = numerical_advantage(11, 10);
        let down = numerical_advantage(10, 11);
        assert!((down.possession + 7.0).abs() < 1e-6);
        assert!((down.attack * up.attack - 1.0).abs() < 1e-6);
        assert!((down.defense * up.defense - 1.0).abs() < 1e-6);
        assert!((down.fatigue - 1.25).abs() < 1e-6, "short-handed sides tire faster");
    }

    #[test]
    fn test_two_man_deficit_compounds() {
        let mods = numerical_advantage(9, 11);
        assert!((mods.possession + 14.0).abs() < 1e-6);
        assert!(mods.attack < numerical_advantage(10, 11).attack);
        assert!((mods.fatigue - 1.5).abs() < 1e-6);
    }
}
