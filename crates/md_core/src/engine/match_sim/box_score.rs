//! The finalize pass: reduce the event stream and per-player counters into
//! the caller-facing `MatchResult`.

use super::MatchEngine;
use crate::models::{
    BoxScore, EventType, MatchResult, PenaltyShootoutResult, SidePair, TeamSide,
};

impl MatchEngine {
    /// Build the match result after the final whistle (and shootout, if
    /// one was needed).
    pub(crate) fn finalize(
        &mut self,
        penalty_shootout: Option<PenaltyShootoutResult>,
    ) -> MatchResult {
        let mut box_score = BoxScore::default();
        for event in &self.events {
            let side = event.side;
            if event.event_type.is_shot() {
                box_score.shots[side] += 1;
            }
            if event.event_type.is_shot_on_target() {
                box_score.shots_on_target[side] += 1;
            }
            match event.event_type {
                EventType::Corner => box_score.corners[side] += 1,
                EventType::Foul => box_score.fouls[side] += 1,
                EventType::Offside => box_score.offsides[side] += 1,
                EventType::YellowCard => box_score.yellow_cards[side] += 1,
                EventType::RedCard => box_score.red_cards[side] += 1,
                _ => {}
            }
        }

        box_score.possession = self.possession_split();
        box_score.player_stats = std::mem::take(&mut self.player_stats);

        let play_by_play = self
            .events
            .iter()
            .map(|e| format!("{}' {}", e.minute, e.description))
            .collect();

        let winner = if self.score[TeamSide::Home] > self.score[TeamSide::Away] {
            Some(self.teams[TeamSide::Home].id)
        } else if self.score[TeamSide::Away] > self.score[TeamSide::Home] {
            Some(self.teams[TeamSide::Away].id)
        } else {
            penalty_shootout.as_ref().map(|s| s.winner)
        };

        MatchResult {
            home_team_id: self.teams[TeamSide::Home].id,
            away_team_id: self.teams[TeamSide::Away].id,
            score: self.score,
            half_time_score: self.half_time_score,
            winner,
            events: std::mem::take(&mut self.events),
            box_score,
            play_by_play,
            penalty_shootout,
            post_game_injuries: self.injuries.post_game_injuries(),
            injured_out_players: self.injuries.removed_players(),
        }
    }

    /// Possession percentages from the per-minute tally, normalized to sum
    /// to 100 even when rounding.
    fn possession_split(&self) -> SidePair<f32> {
        let home = self.possession_minutes[TeamSide::Home] as f32;
        let away = self.possession_minutes[TeamSide::Away] as f32;
        let total = home + away;
        if total == 0.0 {
            return SidePair::new(50.0, 50.0);
        }
        let home_pct = (home / total * 1000.0).round() / 10.0;
        SidePair::new(home_pct, 100.0 - home_pct)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_plan;
    use super::*;
    use crate::engine::match_sim::MatchEngine;

    #[test]
    fn test_box_score_counts_match_events() {
        let engine = MatchEngine::new(test_plan(81)).unwrap();
        let result = engine.simulate();

        for side in TeamSide::BOTH {
            let shots = result
                .events
                .iter()
                .filter(|e| e.side == side && e.event_type.is_shot())
                .count() as u16;
            assert_eq!(result.box_score.shots[side], shots);

            let fouls = result
                .events
                .iter()
                .filter(|e| e.side == side && e.event_type == EventType::Foul)
                .count() as u16;
            assert_eq!(result.box_score.fouls[side], fouls);
        }
    }

    #[test]
    fn test_possession_sums_to_one_hundred() {
        let engine = MatchEngine::new(test_plan(82)).unwrap();
        let result = engine.simulate();
        let total = result.box_score.possession[TeamSide::Home]
            + result.box_score.possession[TeamSide::Away];
        assert!((total - 100.0).abs() < 1e-3, "possession total: {}", total);
    }

    #[test]
    fn test_empty_match_splits_possession_evenly() {
        let engine = MatchEngine::new(test_plan(83)).unwrap();
        let split = engine.possession_split();
        assert_eq!(*split.home(), 50.0);
        assert_eq!(*split.away(), 50.0);
    }

    #[test]
    fn test_play_by_play_covers_every_event() {
        let engine = MatchEngine::new(test_plan(84)).unwrap();
        let result = engine.simulate();
        assert_eq!(result.play_by_play.len(), result.events.len());
        assert!(result.play_by_play[0].contains("get us underway"));
    }
}
