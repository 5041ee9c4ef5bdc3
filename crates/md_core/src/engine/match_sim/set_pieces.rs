//! Corners and set-piece chances.

use super::shots::ShotOrigin;
use super::MatchEngine;
use crate::engine::shot::{chance_score, roll_quality, ShotQuality, StrikeType};
use crate::engine::tuning::*;
use crate::models::{EventType, TeamSide};
use rand::Rng;

impl MatchEngine {
    /// A corner for the attacking side. Most are cleared; some produce a
    /// delivery and an attempt.
    pub(crate) fn generate_corner(&mut self, attacking: TeamSide) {
        let conceder = self.select_corner_conceder(attacking.other());
        let text = self.narrate_corner(attacking, conceder);
        self.emit(EventType::Corner, attacking, None, None, text);

        if self.rng.gen_bool(CORNER_SHOT_CHANCE) {
            self.set_piece_shot(attacking, ShotOrigin::Corner);
        }
    }

    /// A dead-ball delivery into the box: an aerial-weighted target gets
    /// on the end of it, and the deliverer is always credited.
    pub(crate) fn set_piece_shot(&mut self, side: TeamSide, origin: ShotOrigin) {
        let Some(target) = self.select_set_piece_target(side) else {
            return;
        };
        let deliverer = self.select_assister(side, target);

        let strike = if self.rng.gen_bool(SET_PIECE_HEADER_CHANCE) {
            StrikeType::Header
        } else if self.rng.gen_bool(LEFT_FOOT_CHANCE) {
            StrikeType::LeftFoot
        } else {
            StrikeType::RightFoot
        };

        // Chance quality comes from the target and the delivery, not from
        // an open-play build-up.
        let mut contributions: Vec<f32> = [Some(target), deliverer]
            .into_iter()
            .flatten()
            .filter_map(|id| {
                let player = self.teams[side].player(id)?;
                Some(crate::engine::ratings::shot_quality_contribution(&player.attributes))
            })
            .collect();
        contributions.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
        let score = chance_score(&contributions);
        let mut quality = roll_quality(&mut self.rng, score);
        if strike == StrikeType::Header && quality == ShotQuality::LongRange {
            quality = ShotQuality::Half;
        }

        self.attempt_shot(side, target, deliverer, quality, strike, origin);
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_plan;
    use super::*;
    use crate::engine::match_sim::MatchEngine;

    #[test]
    fn test_corner_event_belongs_to_the_attacking_side() {
        let mut engine = MatchEngine::new(test_plan(51)).unwrap();
        engine.minute = 25;
        for _ in 0..100 {
            engine.generate_corner(TeamSide::Home);
        }
        let corners: Vec<_> =
            engine.events.iter().filter(|e| e.event_type == EventType::Corner).collect();
        assert!(corners.len() >= 100, "blocked rebounds may add more corners");
        assert!(corners.iter().all(|e| e.side == TeamSide::Home));
    }

    #[test]
    fn test_some_corners_produce_attempts() {
        let mut engine = MatchEngine::new(test_plan(52)).unwrap();
        engine.minute = 60;
        for _ in 0..300 {
            engine.generate_corner(TeamSide::Away);
        }
        let attempts =
            engine.events.iter().filter(|e| e.event_type.is_shot()).count();
        // Roughly a fifth of 300 corners; far outside chance of zero.
        assert!(attempts > 20, "attempts from corners: {}", attempts);
        for event in engine.events.iter().filter(|e| e.event_type.is_shot()) {
            assert_eq!(event.side, TeamSide::Away);
        }
    }

    #[test]
    fn test_set_piece_shots_credit_the_deliverer() {
        let mut engine = MatchEngine::new(test_plan(53)).unwrap();
        engine.minute = 70;
        for _ in 0..200 {
            engine.set_piece_shot(TeamSide::Home, ShotOrigin::FreeKick);
        }
        let attempts: Vec<_> =
            engine.events.iter().filter(|e| e.event_type.is_shot()).collect();
        assert_eq!(attempts.len(), 200);
        assert!(attempts.iter().all(|e| e.assist_id.is_some()));
        // The target never delivers to themselves.
        assert!(attempts.iter().all(|e| e.assist_id != e.player_id));
    }

    #[test]
    fn test_set_piece_targets_exclude_the_goalkeeper() {
        let mut engine = MatchEngine::new(test_plan(54)).unwrap();
        for _ in 0..300 {
            let target = engine.select_set_piece_target(TeamSide::Home).unwrap();
            assert!(!engine.position_of(TeamSide::Home, target).is_goalkeeper());
        }
    }
}
