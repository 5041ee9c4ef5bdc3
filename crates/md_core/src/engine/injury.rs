//! Injury tracking collaborator.
//!
//! The engine runs one check per active player per minute, feeding the
//! tracker a pre-drawn uniform roll so the tracker itself stays
//! deterministic. Fragile and tired players get hurt more often.

use crate::models::{InjuryReport, InjurySeverity, TeamSide};

/// Port consumed by the match engine's per-minute injury check.
pub trait InjuryTracker {
    /// `roll` is uniform in [0, 1). Returns the severity when the player
    /// picks up an injury this minute.
    fn check_injury(
        &mut self,
        player_id: u32,
        durability: u8,
        energy: f32,
        roll: f64,
        minute: u16,
        side: TeamSide,
    ) -> Option<InjurySeverity>;

    /// Injuries that persist beyond the final whistle.
    fn post_game_injuries(&self) -> Vec<InjuryReport>;

    /// Players removed from the match by injury.
    fn removed_players(&self) -> Vec<u32>;
}

/// Per-player, per-minute base injury probability. Tuned for roughly one
/// injury every two or three matches across 22 players.
const BASE_INJURY_CHANCE: f64 = 0.0002;

/// Default tracker: durability and fatigue scale the base chance.
#[derive(Debug, Clone, Default)]
pub struct DurabilityInjuries {
    reports: Vec<InjuryReport>,
}

impl DurabilityInjuries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Injury probability for one player-minute.
    pub fn injury_chance(durability: u8, energy: f32) -> f64 {
        // 50 durability is baseline; glass players double the risk.
        let fragility = 1.5 - durability as f64 / 100.0;
        // Tired legs: up to +60% risk when running on empty.
        let tiredness = 1.0 + 0.6 * (1.0 - energy as f64 / 100.0);
        BASE_INJURY_CHANCE * fragility * tiredness
    }

    /// Map the sub-threshold portion of the roll onto a severity so one
    /// uniform draw decides both occurrence and outcome.
    fn severity_from_roll(roll: f64, chance: f64) -> InjurySeverity {
        let scaled = roll / chance;
        if scaled < 0.50 {
            InjurySeverity::Momentary
        } else if scaled < 0.85 {
            InjurySeverity::Temporary
        } else {
            InjurySeverity::GameEnding
        }
    }
}

impl InjuryTracker for DurabilityInjuries {
    fn check_injury(
        &mut self,
        player_id: u32,
        durability: u8,
        energy: f32,
        roll: f64,
        minute: u16,
        side: TeamSide,
    ) -> Option<InjurySeverity> {
        let chance = Self::injury_chance(durability, energy);
        if roll >= chance {
            return None;
        }
        let severity = Self::severity_from_roll(roll, chance);
        self.reports.push(InjuryReport { player_id, side, minute, severity });
        Some(severity)
    }

    fn post_game_injuries(&self) -> Vec<InjuryReport> {
        self.reports
            .iter()
            .filter(|r| r.severity == InjurySeverity::GameEnding)
            .cloned()
            .collect()
    }

    fn removed_players(&self) -> Vec<u32> {
        self.reports
            .iter()
            .filter(|r| r.severity.forces_removal())
            .map(|r| r.player_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_roll_means_no_injury() {
        let mut tracker = DurabilityInjuries::new();
        let outcome = tracker.check_injury(1, 50, 100.0, 0.5, 10, TeamSide::Home);
        assert!(outcome.is_none());
        assert!(tracker.post_game_injuries().is_empty());
    }

    #[test]
    fn test_fragile_tired_players_risk_more() {
        let sturdy_fresh = DurabilityInjuries::injury_chance(90, 100.0);
        let fragile_spent = DurabilityInjuries::injury_chance(10, 0.0);
        assert!(fragile_spent > sturdy_fresh * 2.0);
    }

    #[test]
    fn test_tiny_roll_is_momentary_knock() {
        let mut tracker = DurabilityInjuries::new();
        let outcome = tracker.check_injury(2, 50, 50.0, 0.0, 30, TeamSide::Away);
        assert_eq!(outcome, Some(InjurySeverity::Momentary));
        assert!(tracker.removed_players().is_empty(), "momentary knocks stay on");
        assert!(tracker.post_game_injuries().is_empty());
    }

    #[test]
    fn test_severe_injury_is_removed_and_reported() {
        let mut tracker = DurabilityInjuries::new();
        let chance = DurabilityInjuries::injury_chance(50, 50.0);
        let outcome =
            tracker.check_injury(3, 50, 50.0, chance * 0.95, 70, TeamSide::Home);
        assert_eq!(outcome, Some(InjurySeverity::GameEnding));
        assert_eq!(tracker.removed_players(), vec![3]);
        assert_eq!(tracker.post_game_injuries().len(), 1);
        assert_eq!(tracker.post_game_injuries()[0].minute, 70);
    }

    #[test]
    fn test_temporary_injury_removed_but_recovers() {
        let mut tracker = DurabilityInjuries::new();
        let chance = DurabilityInjuries::injury_chance(50, 50.0);
        let outcome = tracker.check_injury(4, 50, 50.0, chance * 0.6, 55, TeamSide::Away);
        assert_eq!(outcome, Some(InjurySeverity::Temporary));
        assert_eq!(tracker.removed_players(), vec![4]);
        assert!(tracker.post_game_injuries().is_empty());
    }
}
