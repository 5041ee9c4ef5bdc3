//! Minute-by-minute match simulation.
//!
//! `MatchEngine` owns the whole mutable match state and a single seeded
//! RNG; every probability and selection in the simulation draws from that
//! RNG, so the same `MatchPlan` always produces the same result. The impl
//! is split across this directory by concern: player selection weights,
//! fouls and cards, open-play shots, set pieces, the penalty shootout,
//! narrative text, and the box-score finalize pass.

mod box_score;
mod fouls;
mod narrative;
mod player_selection;
mod set_pieces;
mod shootout;
mod shots;

use crate::engine::advantage::{numerical_advantage, AdvantageModifiers};
use crate::engine::injury::{DurabilityInjuries, InjuryTracker};
use crate::engine::subs::{AutoSubstitutions, SubState, SubstitutionSystem};
use crate::engine::tuning::*;
use crate::error::{MatchError, Result};
use crate::models::{
    EventType, MatchEvent, MatchResult, PlayerStats, Position, SidePair, Team, TeamSide,
};
use crate::player::{OverallCalculator, WeightedOverall};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

/// Everything needed to run one match.
#[derive(Debug, Clone)]
pub struct MatchPlan {
    pub home_team: Team,
    pub away_team: Team,
    pub seed: u64,
}

/// The aggregate root for one simulated match. Created per match,
/// discarded once `simulate` returns.
pub struct MatchEngine {
    pub(crate) teams: SidePair<Team>,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) minute: u16,
    pub(crate) score: SidePair<u8>,
    half_time_score: SidePair<u8>,
    pub(crate) possession: TeamSide,
    possession_minutes: SidePair<u32>,
    pub(crate) sub_states: SidePair<SubState>,
    pub(crate) advantage: SidePair<AdvantageModifiers>,
    pub(crate) events: Vec<MatchEvent>,
    /// Extra stoppage minutes accumulated per half from injury delays.
    stoppage_extra: [u16; 2],
    pub(crate) player_stats: HashMap<u32, PlayerStats>,
    team_strength: SidePair<f32>,

    // Collaborator ports.
    pub(crate) subs: Box<dyn SubstitutionSystem>,
    pub(crate) injuries: Box<dyn InjuryTracker>,
    pub(crate) overall: Box<dyn OverallCalculator>,
}

impl MatchEngine {
    pub fn new(plan: MatchPlan) -> Result<Self> {
        plan.home_team.validate()?;
        plan.away_team.validate()?;

        let mut seen = std::collections::HashSet::new();
        for player in plan.home_team.players.iter().chain(plan.away_team.players.iter()) {
            if !seen.insert(player.id) {
                return Err(MatchError::ValidationError(format!(
                    "duplicate player id across rosters: {}",
                    player.id
                )));
            }
        }

        let subs: Box<dyn SubstitutionSystem> = Box::new(AutoSubstitutions);
        let injuries: Box<dyn InjuryTracker> = Box::new(DurabilityInjuries::new());
        let overall: Box<dyn OverallCalculator> = Box::new(WeightedOverall);

        let sub_states =
            SidePair::new(subs.initialize(&plan.home_team), subs.initialize(&plan.away_team));
        let team_strength = SidePair::new(
            Self::strength_of(&plan.home_team, overall.as_ref()),
            Self::strength_of(&plan.away_team, overall.as_ref()),
        );

        Ok(Self {
            teams: SidePair::new(plan.home_team, plan.away_team),
            rng: ChaCha8Rng::seed_from_u64(plan.seed),
            minute: 0,
            score: SidePair::new(0, 0),
            half_time_score: SidePair::new(0, 0),
            possession: TeamSide::Home,
            possession_minutes: SidePair::new(0, 0),
            sub_states,
            advantage: SidePair::new(AdvantageModifiers::NEUTRAL, AdvantageModifiers::NEUTRAL),
            events: Vec::new(),
            stoppage_extra: [0, 0],
            player_stats: HashMap::new(),
            team_strength,
            subs,
            injuries,
            overall,
        })
    }

    /// Replace the substitution collaborator (dependency injection seam).
    pub fn with_substitution_system(mut self, system: Box<dyn SubstitutionSystem>) -> Self {
        self.sub_states =
            SidePair::new(system.initialize(self.teams.home()), system.initialize(self.teams.away()));
        self.subs = system;
        self
    }

    /// Replace the injury tracker.
    pub fn with_injury_tracker(mut self, tracker: Box<dyn InjuryTracker>) -> Self {
        self.injuries = tracker;
        self
    }

    fn strength_of(team: &Team, overall: &dyn OverallCalculator) -> f32 {
        let starters = team.starters();
        if starters.is_empty() {
            return 0.0;
        }
        let total: f32 = starters.iter().map(|p| overall.overall(p, p.position)).sum();
        total / starters.len() as f32
    }

    // =======================================================================
    // Match loop
    // =======================================================================

    /// Run the full match and produce the result. Consumes the engine;
    /// a new match needs a new engine.
    pub fn simulate(mut self) -> MatchResult {
        self.emit(EventType::KickOff, TeamSide::Home, None, None, self.narrate_kickoff(TeamSide::Home));

        // First half.
        for minute in 1..=HALF_MINUTES {
            self.simulate_minute(minute, 0);
        }
        let first_half_stoppage =
            (STOPPAGE_BASE_FIRST_HALF + self.stoppage_extra[0]).min(STOPPAGE_MAX);
        for _ in 0..first_half_stoppage {
            self.simulate_minute(HALF_MINUTES, 0);
        }
        self.half_time_score = self.score;
        self.emit(
            EventType::HalfTime,
            TeamSide::Home,
            None,
            None,
            self.narrate_half_time(),
        );
        self.half_time_substitutions();

        // Second half.
        self.emit(EventType::KickOff, TeamSide::Away, None, None, self.narrate_kickoff(TeamSide::Away));
        for minute in (HALF_MINUTES + 1)..=(HALF_MINUTES * 2) {
            self.simulate_minute(minute, 1);
        }
        let second_half_stoppage =
            (STOPPAGE_BASE_SECOND_HALF + self.stoppage_extra[1]).min(STOPPAGE_MAX);
        for _ in 0..second_half_stoppage {
            self.simulate_minute(HALF_MINUTES * 2, 1);
        }

        self.emit(EventType::FullTime, TeamSide::Home, None, None, self.narrate_full_time());

        let penalty_shootout = if self.score.home() == self.score.away() {
            Some(self.penalty_shootout())
        } else {
            None
        };

        self.finalize(penalty_shootout)
    }

    /// One simulated minute. `half` is 0 or 1 and only routes injury
    /// stoppage to the right half's tally.
    fn simulate_minute(&mut self, minute: u16, half: usize) {
        self.minute = minute;

        // 1. Numerical advantage, recomputed every minute.
        let counts = SidePair::new(
            self.sub_states.home().active_count(),
            self.sub_states.away().active_count(),
        );
        for side in TeamSide::BOTH {
            self.advantage[side] = numerical_advantage(counts[side], counts[side.other()]);
        }

        // 2. Fatigue and minutes played.
        for side in TeamSide::BOTH {
            let tick = FATIGUE_PER_MINUTE
                * self.teams[side].tactics.pressing.fatigue_factor()
                * self.advantage[side].fatigue;
            let has_possession = self.possession == side;
            self.subs.update_fatigue(&mut self.sub_states[side], tick, has_possession);

            let on_field: Vec<u32> =
                self.sub_states[side].on_field().iter().map(|c| c.player_id).collect();
            for id in on_field {
                self.stats_mut(id).minutes += 1;
            }
        }

        // 3. Injury checks.
        self.run_injury_checks(half);

        // 4. Scheduled substitution windows.
        if SUB_WINDOWS.contains(&minute) {
            for side in TeamSide::BOTH {
                self.try_substitution(side, false);
            }
        }

        // 5. Possession for the minute.
        let home_share = self.possession_share(TeamSide::Home);
        self.possession = if self.rng.gen::<f32>() * 100.0 < home_share {
            TeamSide::Home
        } else {
            TeamSide::Away
        };
        self.possession_minutes[self.possession] += 1;

        // 6. Event roll.
        if self.rng.gen::<f64>() >= EVENT_CHANCE_PER_MINUTE {
            return;
        }
        let attacking = self.possession;
        let roll = self.rng.gen::<f64>();
        if roll < EVENT_SHARE_SHOT {
            self.open_play_shot(attacking);
        } else if roll < EVENT_SHARE_SHOT + EVENT_SHARE_FOUL {
            self.generate_foul(attacking);
        } else if roll < EVENT_SHARE_SHOT + EVENT_SHARE_FOUL + EVENT_SHARE_OFFSIDE {
            self.generate_offside(attacking);
        } else if roll
            < EVENT_SHARE_SHOT + EVENT_SHARE_FOUL + EVENT_SHARE_OFFSIDE + EVENT_SHARE_CORNER
        {
            self.generate_corner(attacking);
        }
        // Remaining share: the minute passes quietly.
    }

    /// Home side's possession share in percent for the current minute.
    fn possession_share(&self, side: TeamSide) -> f32 {
        let opp = side.other();
        let strength_diff = self.team_strength[side] - self.team_strength[opp];
        let tactics = |s: TeamSide| {
            let t = &self.teams[s].tactics;
            t.style.possession_delta() + t.pressing.possession_delta()
        };
        let share = 50.0
            + strength_diff * POSSESSION_PER_STRENGTH_POINT
            + tactics(side)
            - tactics(opp)
            + self.advantage[side].possession;
        share.clamp(POSSESSION_MIN, POSSESSION_MAX)
    }

    fn run_injury_checks(&mut self, half: usize) {
        for side in TeamSide::BOTH {
            let on_field: Vec<(u32, u8, f32)> = self.sub_states[side]
                .on_field()
                .iter()
                .map(|c| {
                    let durability = self.teams[side]
                        .player(c.player_id)
                        .map(|p| p.attributes.durability)
                        .unwrap_or(50);
                    (c.player_id, durability, c.energy)
                })
                .collect();

            for (player_id, durability, energy) in on_field {
                let roll = self.rng.gen::<f64>();
                let Some(severity) = self.injuries.check_injury(
                    player_id, durability, energy, roll, self.minute, side,
                ) else {
                    continue;
                };

                self.stoppage_extra[half] += severity.stoppage_minutes();
                let delay = self.narrate_injury(side, player_id, severity);
                self.emit(EventType::InjuryDelay, side, Some(player_id), None, delay);

                if severity.forces_removal() {
                    log::debug!(
                        "minute {}: player {} off injured ({:?})",
                        self.minute,
                        player_id,
                        severity
                    );
                    let decision =
                        self.subs.handle_injury(&mut self.sub_states[side], player_id);
                    if let Some(decision) = decision {
                        let text = self.narrate_substitution(side, &decision);
                        self.emit(
                            EventType::Substitution,
                            side,
                            Some(decision.player_out),
                            Some(decision.player_in),
                            text,
                        );
                        self.stats_mut(decision.player_in);
                    }
                }

                let resume = self.narrate_play_resumes(side);
                self.emit(EventType::PlayResumes, side, None, None, resume);
            }
        }
    }

    fn half_time_substitutions(&mut self) {
        for side in TeamSide::BOTH {
            self.try_substitution(side, true);
        }
    }

    fn try_substitution(&mut self, side: TeamSide, is_half_time: bool) {
        let Some(decision) =
            self.subs.check_for_substitution(&self.sub_states[side], is_half_time)
        else {
            return;
        };
        log::debug!(
            "minute {}: {:?} substitution {} -> {}",
            self.minute,
            side,
            decision.player_out,
            decision.player_in
        );
        self.subs.execute_substitution(&mut self.sub_states[side], &decision);
        let text = self.narrate_substitution(side, &decision);
        self.emit(
            EventType::Substitution,
            side,
            Some(decision.player_out),
            Some(decision.player_in),
            text,
        );
        // Fresh stats entry for the incoming player.
        self.stats_mut(decision.player_in);
    }

    // =======================================================================
    // Shared helpers
    // =======================================================================

    pub(crate) fn emit(
        &mut self,
        event_type: EventType,
        side: TeamSide,
        player_id: Option<u32>,
        assist_id: Option<u32>,
        description: String,
    ) {
        self.events.push(MatchEvent::new(
            self.minute,
            event_type,
            side,
            player_id,
            assist_id,
            description,
        ));
    }

    pub(crate) fn stats_mut(&mut self, player_id: u32) -> &mut PlayerStats {
        self.player_stats.entry(player_id).or_default()
    }

    pub(crate) fn player_name(&self, side: TeamSide, player_id: u32) -> String {
        self.teams[side]
            .player(player_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("#{}", player_id))
    }

    pub(crate) fn position_of(&self, side: TeamSide, player_id: u32) -> Position {
        // Unknown ids fall back to a central midfielder rather than failing.
        self.teams[side].player(player_id).map(|p| p.position).unwrap_or(Position::CM)
    }

    /// The defending keeper: the first on-field player positioned GK, or
    /// any on-field player as a degraded fallback.
    pub(crate) fn keeper_of(&self, side: TeamSide) -> Option<(u32, f32, f32)> {
        let state = &self.sub_states[side];
        let keeper = state
            .on_field()
            .iter()
            .find(|c| c.position.is_goalkeeper())
            .or_else(|| {
                log::warn!("no goalkeeper on field for {:?}; using an outfield fallback", side);
                state.on_field().first()
            })?;
        let player = self.teams[side].player(keeper.player_id)?;
        let rating = self.overall.overall(player, Position::GK);
        Some((keeper.player_id, rating, keeper.energy))
    }

    /// Credit a goal: score, scorer/assister stats, plus/minus for every
    /// player on the pitch.
    pub(crate) fn apply_goal(&mut self, side: TeamSide, scorer: u32, assister: Option<u32>) {
        self.score[side] = self.score[side].saturating_add(1);
        self.stats_mut(scorer).goals += 1;
        if let Some(assister) = assister {
            self.stats_mut(assister).assists += 1;
        }
        for s in TeamSide::BOTH {
            let delta: i16 = if s == side { 1 } else { -1 };
            let on_field: Vec<u32> =
                self.sub_states[s].on_field().iter().map(|c| c.player_id).collect();
            for id in on_field {
                self.stats_mut(id).plus_minus += delta;
            }
        }
    }
}
