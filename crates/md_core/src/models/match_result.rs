//! Match result data structures.
//!
//! These are the sink of the simulation: the engine fills them in during
//! the minute loop and the finalize pass, and discards all other state.

use super::{InjurySeverity, MatchEvent, SidePair, TeamSide};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-match, per-player counters. Created lazily on first involvement and
/// updated additively; only `plus_minus` may go negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub shots: u16,
    pub shots_on_target: u16,
    pub goals: u16,
    pub assists: u16,
    pub saves: u16,
    pub yellow_cards: u8,
    pub red_cards: u8,
    pub plus_minus: i16,
    pub minutes: u16,
}

/// Per-side totals reduced from the event stream plus the possession tally.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BoxScore {
    pub shots: SidePair<u16>,
    pub shots_on_target: SidePair<u16>,
    pub corners: SidePair<u16>,
    pub fouls: SidePair<u16>,
    pub offsides: SidePair<u16>,
    pub yellow_cards: SidePair<u16>,
    pub red_cards: SidePair<u16>,
    /// Percentages; the pair sums to 100.
    pub possession: SidePair<f32>,
    pub player_stats: HashMap<u32, PlayerStats>,
}

/// Outcome of the post-regulation shootout, present only when regulation
/// ended level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PenaltyShootoutResult {
    /// Ordered kick outcomes per side (true = converted).
    pub kicks: SidePair<Vec<bool>>,
    pub score: SidePair<u8>,
    pub winner: u32,
}

/// A player who picked up an injury during the match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InjuryReport {
    pub player_id: u32,
    pub side: TeamSide,
    pub minute: u16,
    pub severity: InjurySeverity,
}

/// Everything `simulate` produces. Owned by the caller; no simulation state
/// survives past it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub score: SidePair<u8>,
    pub half_time_score: SidePair<u8>,
    /// Winning team id. Regulation winner, or shootout winner on a draw.
    pub winner: Option<u32>,
    pub events: Vec<MatchEvent>,
    pub box_score: BoxScore,
    /// One line per event, in order of occurrence.
    pub play_by_play: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_shootout: Option<PenaltyShootoutResult>,
    /// Injuries that persist beyond the final whistle.
    pub post_game_injuries: Vec<InjuryReport>,
    /// Players removed from the match by injury.
    pub injured_out_players: Vec<u32>,
}

impl MatchResult {
    pub fn score_for(&self, side: TeamSide) -> u8 {
        *self.score.get(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventType;

    #[test]
    fn test_player_stats_default_is_zeroed() {
        let stats = PlayerStats::default();
        assert_eq!(stats.goals, 0);
        assert_eq!(stats.plus_minus, 0);
    }

    #[test]
    fn test_result_serializes_without_shootout_field_when_absent() {
        let result = MatchResult {
            home_team_id: 1,
            away_team_id: 2,
            score: SidePair::new(2, 1),
            half_time_score: SidePair::new(1, 0),
            winner: Some(1),
            events: vec![MatchEvent::new(
                90,
                EventType::FullTime,
                TeamSide::Home,
                None,
                None,
                "Full time",
            )],
            box_score: BoxScore::default(),
            play_by_play: vec![],
            penalty_shootout: None,
            post_game_injuries: vec![],
            injured_out_players: vec![],
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("penalty_shootout"));
        assert!(json.contains("\"winner\":1"));
    }
}
