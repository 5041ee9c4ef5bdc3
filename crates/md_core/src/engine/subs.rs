//! Substitution collaborator.
//!
//! The match engine never forges fatigue values itself: it reads the
//! on-field/bench condition lists from `SubState` each minute and mutates
//! them only through the `SubstitutionSystem` port. The default
//! implementation substitutes on a fatigue threshold with a same-zone
//! bench preference and a five-substitution cap.

use crate::models::{Position, Team, STARTERS};
use std::collections::{HashMap, HashSet};

/// Maximum substitutions per side.
pub const MAX_SUBS: u8 = 5;

/// Energy threshold below which a player is a substitution candidate.
const OPEN_PLAY_THRESHOLD: f32 = 35.0;
/// At the half-time break the bar is lower.
const HALF_TIME_THRESHOLD: f32 = 50.0;

/// One player's in-match condition. Energy is remaining freshness 0-100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerCondition {
    pub player_id: u32,
    pub position: Position,
    pub stamina: u8,
    pub energy: f32,
}

/// Opaque (to the engine) per-side substitution state.
#[derive(Debug, Clone)]
pub struct SubState {
    on_field: Vec<PlayerCondition>,
    bench: Vec<PlayerCondition>,
    subs_made: u8,
    yellow_counts: HashMap<u32, u8>,
    dismissed: HashSet<u32>,
}

impl SubState {
    pub fn on_field(&self) -> &[PlayerCondition] {
        &self.on_field
    }

    pub fn on_bench(&self) -> &[PlayerCondition] {
        &self.bench
    }

    pub fn active_count(&self) -> u8 {
        self.on_field.len() as u8
    }

    pub fn is_on_field(&self, player_id: u32) -> bool {
        self.on_field.iter().any(|c| c.player_id == player_id)
    }

    pub fn is_dismissed(&self, player_id: u32) -> bool {
        self.dismissed.contains(&player_id)
    }

    pub fn dismissed(&self) -> &HashSet<u32> {
        &self.dismissed
    }

    pub fn subs_made(&self) -> u8 {
        self.subs_made
    }

    pub fn yellow_count(&self, player_id: u32) -> u8 {
        *self.yellow_counts.get(&player_id).unwrap_or(&0)
    }

    /// Remaining energy for an on-field player; off-field lookups report
    /// fresh (bench players do not tire).
    pub fn energy_of(&self, player_id: u32) -> f32 {
        self.on_field
            .iter()
            .find(|c| c.player_id == player_id)
            .map(|c| c.energy)
            .unwrap_or(100.0)
    }

    fn remove_from_field(&mut self, player_id: u32) -> Option<PlayerCondition> {
        let idx = self.on_field.iter().position(|c| c.player_id == player_id)?;
        Some(self.on_field.remove(idx))
    }
}

/// A resolved substitution decision: `player_out` leaves, `player_in`
/// enters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubDecision {
    pub player_out: u32,
    pub player_in: u32,
}

/// Port consumed by the match engine.
pub trait SubstitutionSystem {
    fn initialize(&self, team: &Team) -> SubState;

    /// Called at the fixed break minutes; `is_half_time` lowers the
    /// fatigue bar.
    fn check_for_substitution(&self, state: &SubState, is_half_time: bool)
        -> Option<SubDecision>;

    fn execute_substitution(&self, state: &mut SubState, decision: &SubDecision);

    /// Drain energy for one simulated minute. `tick` already carries the
    /// numerical-advantage fatigue multiplier.
    fn update_fatigue(&self, state: &mut SubState, tick: f32, has_possession: bool);

    /// Dismissed players leave the field and cannot be replaced.
    fn handle_red_card(&self, state: &mut SubState, player_id: u32);

    /// Removes the injured player and, when a substitution is still
    /// available, returns the replacement decision already applied.
    fn handle_injury(&self, state: &mut SubState, player_id: u32) -> Option<SubDecision>;

    /// Records a yellow; returns true when it is the player's second.
    fn record_yellow_card(&self, state: &mut SubState, player_id: u32) -> bool;
}

/// Default implementation: fatigue-threshold substitutions.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoSubstitutions;

impl AutoSubstitutions {
    /// Prefer a bench player covering the same zone; otherwise the first
    /// available outfielder (keepers only replace keepers).
    fn find_replacement(bench: &[PlayerCondition], out_pos: Position) -> Option<u32> {
        let same_zone = bench.iter().find(|c| {
            (c.position.is_defender() && out_pos.is_defender())
                || (c.position.is_midfielder() && out_pos.is_midfielder())
                || (c.position.is_forward() && out_pos.is_forward())
                || (c.position.is_goalkeeper() && out_pos.is_goalkeeper())
        });
        if let Some(found) = same_zone {
            return Some(found.player_id);
        }
        bench
            .iter()
            .find(|c| !c.position.is_goalkeeper() || out_pos.is_goalkeeper())
            .map(|c| c.player_id)
    }
}

impl SubstitutionSystem for AutoSubstitutions {
    fn initialize(&self, team: &Team) -> SubState {
        let condition = |p: &crate::models::Player| PlayerCondition {
            player_id: p.id,
            position: p.position,
            stamina: p.attributes.stamina,
            energy: 100.0,
        };
        SubState {
            on_field: team.players.iter().take(STARTERS).map(condition).collect(),
            bench: team.players.iter().skip(STARTERS).map(condition).collect(),
            subs_made: 0,
            yellow_counts: HashMap::new(),
            dismissed: HashSet::new(),
        }
    }

    fn check_for_substitution(
        &self,
        state: &SubState,
        is_half_time: bool,
    ) -> Option<SubDecision> {
        if state.subs_made >= MAX_SUBS || state.bench.is_empty() {
            return None;
        }

        let threshold = if is_half_time { HALF_TIME_THRESHOLD } else { OPEN_PLAY_THRESHOLD };
        let most_tired = state
            .on_field
            .iter()
            .filter(|c| !c.position.is_goalkeeper())
            .filter(|c| c.energy < threshold)
            .min_by(|a, b| a.energy.partial_cmp(&b.energy).unwrap_or(std::cmp::Ordering::Equal))?;

        let player_in = Self::find_replacement(&state.bench, most_tired.position)?;
        Some(SubDecision { player_out: most_tired.player_id, player_in })
    }

    fn execute_substitution(&self, state: &mut SubState, decision: &SubDecision) {
        let Some(bench_idx) =
            state.bench.iter().position(|c| c.player_id == decision.player_in)
        else {
            log::warn!("substitution skipped: player {} not on bench", decision.player_in);
            return;
        };
        if state.remove_from_field(decision.player_out).is_none() {
            log::warn!("substitution skipped: player {} not on field", decision.player_out);
            return;
        }

        let incoming = state.bench.remove(bench_idx);
        state.on_field.push(incoming);
        state.subs_made += 1;
    }

    fn update_fatigue(&self, state: &mut SubState, tick: f32, has_possession: bool) {
        let possession_factor = if has_possession {
            1.0
        } else {
            crate::engine::tuning::FATIGUE_OFF_POSSESSION_FACTOR
        };
        for condition in &mut state.on_field {
            // 50 stamina drains at the base rate; higher stamina slower.
            let stamina_factor = 1.5 - condition.stamina as f32 / 100.0;
            let drain = tick * possession_factor * stamina_factor;
            condition.energy = (condition.energy - drain).max(0.0);
        }
    }

    fn handle_red_card(&self, state: &mut SubState, player_id: u32) {
        state.remove_from_field(player_id);
        state.dismissed.insert(player_id);
    }

    fn handle_injury(&self, state: &mut SubState, player_id: u32) -> Option<SubDecision> {
        let injured = state.remove_from_field(player_id)?;
        if state.subs_made >= MAX_SUBS {
            // No substitutions left: the side plays on short-handed.
            return None;
        }
        let player_in = Self::find_replacement(&state.bench, injured.position)?;
        let decision = SubDecision { player_out: player_id, player_in };
        let bench_idx = state.bench.iter().position(|c| c.player_id == player_in)?;
        let incoming = state.bench.remove(bench_idx);
        state.on_field.push(incoming);
        state.subs_made += 1;
        Some(decision)
    }

    fn record_yellow_card(&self, state: &mut SubState, player_id: u32) -> bool {
        let count = state.yellow_counts.entry(player_id).or_insert(0);
        *count = count.saturating_add(1);
        *count >= 2
    }
}
