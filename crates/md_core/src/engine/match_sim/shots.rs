//! Open-play shot generation and the shared attempt resolver.

use super::MatchEngine;
use crate::engine::ratings;
use crate::engine::shot::{
    chance_score, resolve_shot, roll_quality, ShotInputs, ShotOutcome, ShotQuality, StrikeType,
};
use crate::engine::tuning::*;
use crate::models::{EventType, TeamSide};
use rand::Rng;

/// Where the attempt came from. Only open-play blocks can deflect out for
/// a corner; set-piece rebounds are swallowed to keep the event stream
/// from recursing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShotOrigin {
    OpenPlay,
    FreeKick,
    Corner,
}

impl MatchEngine {
    /// A shot event in open play: pick the shooter, derive the chance
    /// quality from its creators, then run the attempt.
    pub(crate) fn open_play_shot(&mut self, side: TeamSide) {
        let Some(shooter) = self.select_shooter(side) else {
            return;
        };

        let strike = self.roll_strike_type();
        // Headers arrive from a delivery, so they always carry an assist.
        let assisted = strike == StrikeType::Header || self.rng.gen_bool(ASSIST_CHANCE);
        let assist = if assisted { self.select_assister(side, shooter) } else { None };

        let contributions = self.creation_contributions(side, shooter);
        let score = chance_score(&contributions);
        let mut quality = roll_quality(&mut self.rng, score);
        if strike == StrikeType::Header && quality == ShotQuality::LongRange {
            // Nobody heads from distance; treat it as a contested ball in.
            quality = ShotQuality::Half;
        }

        self.attempt_shot(side, shooter, assist, quality, strike, ShotOrigin::OpenPlay);
    }

    fn roll_strike_type(&mut self) -> StrikeType {
        let roll = self.rng.gen::<f64>();
        if roll < HEADER_CHANCE {
            StrikeType::Header
        } else if roll < HEADER_CHANCE + LEFT_FOOT_CHANCE {
            StrikeType::LeftFoot
        } else {
            StrikeType::RightFoot
        }
    }

    /// Resolve one attempt through the block / on-target / save gates and
    /// record events and stats. Shared by open play, free kicks and
    /// corners.
    pub(crate) fn attempt_shot(
        &mut self,
        side: TeamSide,
        shooter: u32,
        assist: Option<u32>,
        quality: ShotQuality,
        strike: StrikeType,
        origin: ShotOrigin,
    ) -> ShotOutcome {
        let defending = side.other();
        let energy = self.sub_states[side].energy_of(shooter);
        let accuracy = self.teams[side]
            .player(shooter)
            .map(|p| ratings::shooting_accuracy(&p.attributes, quality, energy))
            .unwrap_or(50.0);

        let inputs = ShotInputs {
            quality,
            shooter_accuracy: accuracy,
            blocker: self.select_blocker(defending),
            keeper: self.keeper_of(defending),
            attacker_advantage: self.advantage[side].attack,
            defender_advantage: self.advantage[defending].defense,
        };
        let outcome = resolve_shot(&mut self.rng, &inputs);

        self.stats_mut(shooter).shots += 1;
        match outcome {
            ShotOutcome::Goal => {
                self.stats_mut(shooter).shots_on_target += 1;
                self.apply_goal(side, shooter, assist);
                let text = self.narrate_goal(side, shooter, assist, quality, strike);
                self.emit(EventType::Goal, side, Some(shooter), assist, text);
            }
            ShotOutcome::Saved { keeper_id } => {
                self.stats_mut(shooter).shots_on_target += 1;
                self.stats_mut(keeper_id).saves += 1;
                let text = self.narrate_shot_saved(side, shooter, keeper_id, quality, strike);
                self.emit(EventType::ShotOnTarget, side, Some(shooter), assist, text);
            }
            ShotOutcome::Missed => {
                let text = self.narrate_shot_missed(side, shooter, quality, strike);
                self.emit(EventType::ShotOffTarget, side, Some(shooter), assist, text);
            }
            ShotOutcome::Blocked { blocker_id } => {
                let text = self.narrate_shot_blocked(side, shooter, blocker_id);
                self.emit(EventType::ShotBlocked, side, Some(shooter), assist, text);
                if origin == ShotOrigin::OpenPlay
                    && self.rng.gen_bool(BLOCKED_SHOT_CORNER_CHANCE)
                {
                    self.generate_corner(side);
                }
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_plan;
    use super::*;
    use crate::engine::match_sim::MatchEngine;

    fn count_events(engine: &MatchEngine, pred: impl Fn(&EventType) -> bool) -> usize {
        engine.events.iter().filter(|e| pred(&e.event_type)).count()
    }

    #[test]
    fn test_open_play_shot_always_records_an_attempt() {
        let mut engine = MatchEngine::new(test_plan(31)).unwrap();
        engine.minute = 10;
        for _ in 0..200 {
            engine.open_play_shot(TeamSide::Home);
        }
        let shot_events = count_events(&engine, |e| e.is_shot());
        assert!(shot_events >= 200, "every attempt emits a shot event");

        let attempts: u16 = engine
            .player_stats
            .values()
            .map(|s| s.shots)
            .sum();
        assert_eq!(attempts as usize, 200);
    }

    #[test]
    fn test_goal_count_matches_goal_events() {
        let mut engine = MatchEngine::new(test_plan(32)).unwrap();
        engine.minute = 20;
        for _ in 0..300 {
            engine.open_play_shot(TeamSide::Away);
        }
        let goal_events = count_events(&engine, |e| *e == EventType::Goal);
        assert_eq!(goal_events, *engine.score.away() as usize);
        assert_eq!(*engine.score.home(), 0);
    }

    #[test]
    fn test_saves_credited_to_the_keeper() {
        let mut engine = MatchEngine::new(test_plan(33)).unwrap();
        engine.minute = 30;
        for _ in 0..300 {
            engine.open_play_shot(TeamSide::Home);
        }
        let on_target_events = count_events(&engine, |e| *e == EventType::ShotOnTarget);
        // Every non-goal on-target shot is a save by the away keeper.
        let keeper_saves = engine.player_stats.get(&200).map(|s| s.saves).unwrap_or(0);
        assert_eq!(keeper_saves as usize, on_target_events);
        assert!(keeper_saves > 0, "300 attempts must produce at least one save");
    }

    #[test]
    fn test_headers_always_assisted() {
        let mut engine = MatchEngine::new(test_plan(34)).unwrap();
        engine.minute = 40;
        for _ in 0..400 {
            engine.open_play_shot(TeamSide::Home);
        }
        let headers: Vec<_> = engine
            .events
            .iter()
            .filter(|e| e.event_type.is_shot() && e.description.contains("header"))
            .collect();
        assert!(!headers.is_empty(), "400 attempts must include headers");
        for event in headers {
            assert!(event.assist_id.is_some(), "headed attempt without a creator");
        }
    }
}
