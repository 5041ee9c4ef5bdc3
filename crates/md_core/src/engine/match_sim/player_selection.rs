//! Player selection weights.
//!
//! Every selector builds a weighted candidate list from the on-field
//! players of one side and draws through `weighted_pick`. Base weights are
//! position-driven, multiplied by an attribute rating and a jitter factor;
//! dismissed and substituted players are never candidates because the
//! candidate source is the live on-field list.

use super::MatchEngine;
use crate::engine::ratings;
use crate::engine::selection::{vary_weight, weighted_pick};
use crate::models::{Position, TeamSide};
use rand::Rng;

impl MatchEngine {
    /// On-field candidates for one side: (id, position, energy).
    pub(crate) fn on_field(&self, side: TeamSide) -> Vec<(u32, Position, f32)> {
        self.sub_states[side]
            .on_field()
            .iter()
            .map(|c| (c.player_id, c.position, c.energy))
            .collect()
    }

    fn pick_weighted(&mut self, base: Vec<(u32, f32)>) -> Option<u32> {
        let rng = &mut self.rng;
        let candidates: Vec<(u32, f32)> =
            base.into_iter().map(|(id, w)| (id, vary_weight(rng, w))).collect();
        weighted_pick(rng, &candidates)
    }

    /// Shooter: attacking threat (position overall x creativity x pace,
    /// scaled by how often goals flow through that position).
    pub(crate) fn select_shooter(&mut self, side: TeamSide) -> Option<u32> {
        let base: Vec<(u32, f32)> = self
            .on_field(side)
            .into_iter()
            .filter_map(|(id, pos, _)| {
                let player = self.teams[side].player(id)?;
                let overall = self.overall.overall(player, pos);
                Some((id, ratings::attacking_threat(pos, overall, &player.attributes)))
            })
            .collect();
        self.pick_weighted(base)
    }

    /// Assister: playmaking-weighted, midfielders favoured, never the
    /// shooter.
    pub(crate) fn select_assister(&mut self, side: TeamSide, shooter: u32) -> Option<u32> {
        let base: Vec<(u32, f32)> = self
            .on_field(side)
            .into_iter()
            .filter(|(id, _, _)| *id != shooter)
            .filter_map(|(id, pos, _)| {
                let player = self.teams[side].player(id)?;
                let position_weight = if pos.is_midfielder() {
                    3.0
                } else if pos.is_defender() || pos.is_forward() {
                    1.5
                } else {
                    0.1 // Goalkeeper
                };
                Some((id, position_weight * ratings::playmaking(&player.attributes) / 50.0))
            })
            .collect();
        self.pick_weighted(base)
    }

    /// Chance co-creators: the shooter plus up to two teammates, scored by
    /// the 13-term contribution blend and returned best-first.
    pub(crate) fn creation_contributions(&mut self, side: TeamSide, shooter: u32) -> Vec<f32> {
        let extra_creators = match self.rng.gen_range(0..10) {
            0..=2 => 0,
            3..=6 => 1,
            _ => 2,
        };

        let mut creators = vec![shooter];
        for _ in 0..extra_creators {
            let taken = creators.clone();
            let base: Vec<(u32, f32)> = self
                .on_field(side)
                .into_iter()
                .filter(|(id, _, _)| !taken.contains(id))
                .filter_map(|(id, _, _)| {
                    let player = self.teams[side].player(id)?;
                    Some((id, ratings::playmaking(&player.attributes)))
                })
                .collect();
            if let Some(creator) = self.pick_weighted(base) {
                creators.push(creator);
            }
        }

        let mut contributions: Vec<f32> = creators
            .into_iter()
            .filter_map(|id| {
                let player = self.teams[side].player(id)?;
                Some(ratings::shot_quality_contribution(&player.attributes))
            })
            .collect();
        contributions.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
        contributions
    }

    /// Blocker: defenders first, weighted by fatigue-adjusted defensive
    /// ability. Returns the id and that ability for the block gate.
    pub(crate) fn select_blocker(&mut self, side: TeamSide) -> Option<(u32, f32)> {
        let base: Vec<(u32, f32)> = self
            .on_field(side)
            .into_iter()
            .filter_map(|(id, pos, energy)| {
                let player = self.teams[side].player(id)?;
                let position_weight = if pos.is_defender() {
                    3.0
                } else if pos.is_midfielder() {
                    1.5
                } else if pos.is_forward() {
                    0.5
                } else {
                    0.1 // Keepers save, they rarely block
                };
                let ability = ratings::defensive_ability(&player.attributes, energy);
                Some((id, position_weight * ability / 50.0))
            })
            .collect();
        let blocker = self.pick_weighted(base)?;
        let energy = self.sub_states[side].energy_of(blocker);
        let ability = self.teams[side]
            .player(blocker)
            .map(|p| ratings::defensive_ability(&p.attributes, energy))
            .unwrap_or(50.0);
        Some((blocker, ability))
    }

    /// Fouler: aggressive defensive players commit most fouls.
    pub(crate) fn select_fouler(&mut self, side: TeamSide) -> Option<u32> {
        let base: Vec<(u32, f32)> = self
            .on_field(side)
            .into_iter()
            .filter_map(|(id, pos, _)| {
                let player = self.teams[side].player(id)?;
                let position_weight = if pos.is_defender() {
                    2.5
                } else if pos.is_midfielder() {
                    2.0
                } else if pos.is_forward() {
                    1.0
                } else {
                    0.2
                };
                Some((id, position_weight * ratings::aggression(&player.attributes) / 50.0))
            })
            .collect();
        self.pick_weighted(base)
    }

    /// Foul victim: whoever carries the ball, so attackers and creative
    /// midfielders lead.
    pub(crate) fn select_foul_victim(&mut self, side: TeamSide) -> Option<u32> {
        let base: Vec<(u32, f32)> = self
            .on_field(side)
            .into_iter()
            .filter_map(|(id, pos, _)| {
                let player = self.teams[side].player(id)?;
                let position_weight = if pos.is_forward() {
                    2.5
                } else if pos.is_midfielder() {
                    2.0
                } else if pos.is_defender() {
                    1.0
                } else {
                    0.1
                };
                Some((id, position_weight * ratings::playmaking(&player.attributes) / 50.0))
            })
            .collect();
        self.pick_weighted(base)
    }

    /// Offside: attacking-minded players weighted by pace.
    pub(crate) fn select_offside_player(&mut self, side: TeamSide) -> Option<u32> {
        let base: Vec<(u32, f32)> = self
            .on_field(side)
            .into_iter()
            .filter_map(|(id, pos, _)| {
                let player = self.teams[side].player(id)?;
                let position_weight = if pos.is_forward() {
                    3.0
                } else if pos.is_midfielder() {
                    1.2
                } else if pos.is_defender() {
                    0.3
                } else {
                    return None; // Keepers are never caught offside
                };
                Some((id, position_weight * player.attributes.top_speed as f32 / 50.0))
            })
            .collect();
        self.pick_weighted(base)
    }

    /// Corner conceder: a defender turning the ball behind.
    pub(crate) fn select_corner_conceder(&mut self, side: TeamSide) -> Option<u32> {
        let base: Vec<(u32, f32)> = self
            .on_field(side)
            .into_iter()
            .map(|(id, pos, _)| {
                let position_weight = if pos.is_defender() {
                    3.0
                } else if pos.is_midfielder() {
                    1.0
                } else if pos.is_goalkeeper() {
                    0.8 // Tipped over the bar
                } else {
                    0.3
                };
                (id, position_weight)
            })
            .collect();
        self.pick_weighted(base)
    }

    /// Set-piece target: position x height-above-average x aerial ability.
    pub(crate) fn select_set_piece_target(&mut self, side: TeamSide) -> Option<u32> {
        let base: Vec<(u32, f32)> = self
            .on_field(side)
            .into_iter()
            .filter_map(|(id, pos, _)| {
                let player = self.teams[side].player(id)?;
                let position_weight = if pos.is_forward() {
                    2.5
                } else if pos.is_defender() {
                    1.5 // Centre-backs come up for set pieces
                } else if pos.is_midfielder() {
                    1.2
                } else {
                    return None;
                };
                let height_bonus = 1.0
                    + (player.height_in as f32 - crate::models::AVERAGE_HEIGHT_IN as f32)
                        * crate::engine::tuning::HEIGHT_WEIGHT_PER_INCH;
                let aerial = ratings::aerial_ability(&player.attributes);
                Some((id, position_weight * height_bonus.max(0.1) * aerial / 50.0))
            })
            .collect();
        self.pick_weighted(base)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_plan;
    use super::*;
    use crate::engine::match_sim::MatchEngine;

    #[test]
    fn test_assister_never_the_shooter() {
        let mut engine = MatchEngine::new(test_plan(21)).unwrap();
        for _ in 0..300 {
            let shooter = engine.select_shooter(TeamSide::Home).unwrap();
            let assister = engine.select_assister(TeamSide::Home, shooter).unwrap();
            assert_ne!(assister, shooter);
        }
    }

    #[test]
    fn test_selectors_only_pick_on_field_players() {
        let mut engine = MatchEngine::new(test_plan(22)).unwrap();
        // Dismiss a starter; they must never be selected again.
        engine.subs.handle_red_card(&mut engine.sub_states[TeamSide::Home], 103);
        for _ in 0..300 {
            assert_ne!(engine.select_shooter(TeamSide::Home), Some(103));
            assert_ne!(engine.select_fouler(TeamSide::Home), Some(103));
            assert_ne!(engine.select_blocker(TeamSide::Home).map(|(id, _)| id), Some(103));
        }
    }

    #[test]
    fn test_shooter_skews_towards_forwards() {
        let mut engine = MatchEngine::new(test_plan(23)).unwrap();
        let mut forward_picks = 0;
        let trials = 1000;
        for _ in 0..trials {
            let shooter = engine.select_shooter(TeamSide::Home).unwrap();
            if engine.position_of(TeamSide::Home, shooter).is_forward() {
                forward_picks += 1;
            }
        }
        // Two strikers out of eleven, but they should take well over 2/11
        // of the shots.
        assert!(forward_picks > trials / 4, "forward picks: {}", forward_picks);
    }

    #[test]
    fn test_contributions_sorted_best_first() {
        let mut engine = MatchEngine::new(test_plan(24)).unwrap();
        for _ in 0..50 {
            let contributions = engine.creation_contributions(TeamSide::Away, 209);
            assert!(!contributions.is_empty());
            assert!(contributions.len() <= 3);
            for pair in contributions.windows(2) {
                assert!(pair[0] >= pair[1]);
            }
        }
    }
}
