//! Penalty shootout for matches level after regulation.
//!
//! Five regulation rounds with early termination once the trailing side
//! can no longer catch up, then sudden-death pairs. Kickers cycle through
//! the on-field outfielders in nerve order (composure plus accuracy);
//! keepers kick only when a side has nobody else left.

use super::MatchEngine;
use crate::engine::tuning::*;
use crate::models::{EventType, PenaltyShootoutResult, SidePair, TeamSide};
use rand::Rng;

impl MatchEngine {
    pub(crate) fn penalty_shootout(&mut self) -> PenaltyShootoutResult {
        let order = SidePair::new(
            self.kicker_order(TeamSide::Home),
            self.kicker_order(TeamSide::Away),
        );
        let mut kicks: SidePair<Vec<bool>> = SidePair::new(Vec::new(), Vec::new());
        let mut score: SidePair<u8> = SidePair::new(0, 0);

        // Regulation rounds.
        'regulation: for round in 0..SHOOTOUT_REGULATION_ROUNDS {
            for side in TeamSide::BOTH {
                self.take_kick(side, &order[side], round, &mut kicks, &mut score);
                if Self::decided_early(&kicks, &score) {
                    break 'regulation;
                }
            }
        }

        // Sudden death: pairs until the scores split.
        let mut round = SHOOTOUT_REGULATION_ROUNDS;
        while score[TeamSide::Home] == score[TeamSide::Away]
            && round < SHOOTOUT_SUDDEN_DEATH_CAP
        {
            for side in TeamSide::BOTH {
                self.take_kick(side, &order[side], round, &mut kicks, &mut score);
            }
            round += 1;
        }

        // A shootout still level after the cap is settled by lot.
        let winner_side = if score[TeamSide::Home] != score[TeamSide::Away] {
            if score[TeamSide::Home] > score[TeamSide::Away] {
                TeamSide::Home
            } else {
                TeamSide::Away
            }
        } else {
            log::warn!("shootout undecided after {} rounds; drawing lots", round);
            if self.rng.gen_bool(0.5) {
                TeamSide::Home
            } else {
                TeamSide::Away
            }
        };

        PenaltyShootoutResult { kicks, score, winner: self.teams[winner_side].id }
    }

    /// On-field outfielders sorted by penalty nerve, best first. The
    /// keeper only joins the queue when a side has nobody else left.
    fn kicker_order(&self, side: TeamSide) -> Vec<u32> {
        let nerve_of = |id: u32| {
            self.teams[side].player(id).map(|p| {
                (id, p.attributes.composure as f32 + p.attributes.accuracy as f32)
            })
        };
        let mut kickers: Vec<(u32, f32)> = self
            .on_field(side)
            .into_iter()
            .filter(|(_, pos, _)| !pos.is_goalkeeper())
            .filter_map(|(id, _, _)| nerve_of(id))
            .collect();
        if kickers.is_empty() {
            kickers =
                self.on_field(side).into_iter().filter_map(|(id, _, _)| nerve_of(id)).collect();
        }
        kickers.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        kickers.into_iter().map(|(id, _)| id).collect()
    }

    fn take_kick(
        &mut self,
        side: TeamSide,
        order: &[u32],
        round: usize,
        kicks: &mut SidePair<Vec<bool>>,
        score: &mut SidePair<u8>,
    ) {
        let Some(&kicker) = order.get(round % order.len().max(1)) else {
            return;
        };
        let chance = self.conversion_chance(side, kicker);
        let converted = self.rng.gen_bool(chance);

        kicks[side].push(converted);
        if converted {
            score[side] = score[side].saturating_add(1);
        }

        let event_type =
            if converted { EventType::PenaltyScored } else { EventType::PenaltyMissed };
        let text = self.narrate_penalty_kick(side, kicker, converted, score);
        self.emit(event_type, side, Some(kicker), None, text);
    }

    /// Kicker nerve and technique against the opposing keeper.
    fn conversion_chance(&self, side: TeamSide, kicker: u32) -> f64 {
        let gk_rating = self.keeper_of(side.other()).map(|(_, rating, _)| rating).unwrap_or(50.0);
        let Some(player) = self.teams[side].player(kicker) else {
            return PENALTY_BASE_CONVERSION;
        };
        let a = &player.attributes;
        let chance = PENALTY_BASE_CONVERSION
            + (a.composure as f64 - 50.0) / PENALTY_COMPOSURE_DIVISOR
            + (a.accuracy as f64 - 50.0) / PENALTY_ACCURACY_DIVISOR
            + (a.technique as f64 - 50.0) / PENALTY_TECHNIQUE_DIVISOR
            - (gk_rating as f64 - 50.0) / PENALTY_GK_DIVISOR;
        chance.clamp(PENALTY_CONVERSION_MIN, PENALTY_CONVERSION_MAX)
    }

    /// True when the trailing side cannot equalize with its remaining
    /// regulation kicks.
    fn decided_early(kicks: &SidePair<Vec<bool>>, score: &SidePair<u8>) -> bool {
        for side in TeamSide::BOTH {
            let opp = side.other();
            let remaining =
                (SHOOTOUT_REGULATION_ROUNDS - kicks[opp].len().min(SHOOTOUT_REGULATION_ROUNDS))
                    as u8;
            if score[side] > score[opp].saturating_add(remaining) {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_plan;
    use super::*;
    use crate::engine::match_sim::MatchEngine;

    #[test]
    fn test_shootout_produces_a_winner() {
        for seed in 0..20 {
            let mut engine = MatchEngine::new(test_plan(seed)).unwrap();
            let result = engine.penalty_shootout();
            assert!(result.winner == 1 || result.winner == 2);
            assert_ne!(
                result.kicks[TeamSide::Home].len() + result.kicks[TeamSide::Away].len(),
                0
            );
        }
    }

    #[test]
    fn test_shootout_score_matches_converted_kicks() {
        let mut engine = MatchEngine::new(test_plan(61)).unwrap();
        let result = engine.penalty_shootout();
        for side in TeamSide::BOTH {
            let converted = result.kicks[side].iter().filter(|k| **k).count() as u8;
            assert_eq!(converted, result.score[side]);
        }
    }

    #[test]
    fn test_shootout_emits_one_event_per_kick() {
        let mut engine = MatchEngine::new(test_plan(62)).unwrap();
        let result = engine.penalty_shootout();
        let kick_events = engine
            .events
            .iter()
            .filter(|e| {
                e.event_type == EventType::PenaltyScored
                    || e.event_type == EventType::PenaltyMissed
            })
            .count();
        let total_kicks =
            result.kicks[TeamSide::Home].len() + result.kicks[TeamSide::Away].len();
        assert_eq!(kick_events, total_kicks);
    }

    #[test]
    fn test_kicker_order_excludes_the_goalkeeper() {
        let engine = MatchEngine::new(test_plan(63)).unwrap();
        let order = engine.kicker_order(TeamSide::Home);
        assert_eq!(order.len(), 10, "ten outfielders cycle the kicks");
        assert!(!order.contains(&100), "the keeper never joins the queue");
    }

    #[test]
    fn test_keepers_never_kick_while_outfielders_remain() {
        // Long shootouts cycle past ten kickers; the eleventh kick must
        // wrap back to an outfielder, not reach the keeper.
        for seed in 0..20 {
            let mut engine = MatchEngine::new(test_plan(seed)).unwrap();
            engine.penalty_shootout();
            for event in &engine.events {
                if matches!(
                    event.event_type,
                    EventType::PenaltyScored | EventType::PenaltyMissed
                ) {
                    assert_ne!(event.player_id, Some(100), "seed {}", seed);
                    assert_ne!(event.player_id, Some(200), "seed {}", seed);
                }
            }
        }
    }

    #[test]
    fn test_conversion_chance_moves_with_nerve() {
        let mut plan = test_plan(64);
        plan.home_team.players[9].attributes.composure = 95;
        plan.home_team.players[9].attributes.accuracy = 95;
        plan.home_team.players[10].attributes.composure = 10;
        plan.home_team.players[10].attributes.accuracy = 10;
        let ice = plan.home_team.players[9].id;
        let nerves = plan.home_team.players[10].id;
        let engine = MatchEngine::new(plan).unwrap();
        let confident = engine.conversion_chance(TeamSide::Home, ice);
        let shaky = engine.conversion_chance(TeamSide::Home, nerves);
        assert!(confident > shaky);
        assert!((PENALTY_CONVERSION_MIN..=PENALTY_CONVERSION_MAX).contains(&confident));
        assert!((PENALTY_CONVERSION_MIN..=PENALTY_CONVERSION_MAX).contains(&shaky));
    }
}
