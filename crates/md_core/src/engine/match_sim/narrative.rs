//! Commentary text for the event stream.
//!
//! Pure formatting over engine state; no RNG draws happen here, so adding
//! or rewording lines never shifts the simulation.

use super::MatchEngine;
use crate::engine::shot::{ShotQuality, StrikeType};
use crate::engine::subs::SubDecision;
use crate::models::{InjurySeverity, SidePair, TeamSide};

impl MatchEngine {
    fn team_name(&self, side: TeamSide) -> &str {
        &self.teams[side].name
    }

    pub(crate) fn narrate_kickoff(&self, side: TeamSide) -> String {
        format!("{} get us underway", self.team_name(side))
    }

    pub(crate) fn narrate_half_time(&self) -> String {
        format!(
            "Half time: {} {} - {} {}",
            self.team_name(TeamSide::Home),
            self.score[TeamSide::Home],
            self.score[TeamSide::Away],
            self.team_name(TeamSide::Away),
        )
    }

    pub(crate) fn narrate_full_time(&self) -> String {
        format!(
            "Full time: {} {} - {} {}",
            self.team_name(TeamSide::Home),
            self.score[TeamSide::Home],
            self.score[TeamSide::Away],
            self.team_name(TeamSide::Away),
        )
    }

    pub(crate) fn narrate_goal(
        &self,
        side: TeamSide,
        shooter: u32,
        assist: Option<u32>,
        quality: ShotQuality,
        strike: StrikeType,
    ) -> String {
        let scorer = self.player_name(side, shooter);
        match assist {
            Some(assist) => format!(
                "GOAL! {} ({}) finishes {} with a {}, set up by {}",
                scorer,
                self.team_name(side),
                quality.label(),
                strike.label(),
                self.player_name(side, assist),
            ),
            None => format!(
                "GOAL! {} ({}) scores {} with a {}",
                scorer,
                self.team_name(side),
                quality.label(),
                strike.label(),
            ),
        }
    }

    pub(crate) fn narrate_shot_saved(
        &self,
        side: TeamSide,
        shooter: u32,
        keeper: u32,
        quality: ShotQuality,
        strike: StrikeType,
    ) -> String {
        format!(
            "{} tries {} with a {}, but {} makes the save",
            self.player_name(side, shooter),
            quality.label(),
            strike.label(),
            self.player_name(side.other(), keeper),
        )
    }

    pub(crate) fn narrate_shot_missed(
        &self,
        side: TeamSide,
        shooter: u32,
        quality: ShotQuality,
        strike: StrikeType,
    ) -> String {
        format!(
            "{} sends a {} wide {}",
            self.player_name(side, shooter),
            strike.label(),
            quality.label(),
        )
    }

    pub(crate) fn narrate_shot_blocked(
        &self,
        side: TeamSide,
        shooter: u32,
        blocker: u32,
    ) -> String {
        format!(
            "{}'s effort is blocked by {}",
            self.player_name(side, shooter),
            self.player_name(side.other(), blocker),
        )
    }

    pub(crate) fn narrate_foul(
        &self,
        fouling: TeamSide,
        fouler: u32,
        victim: Option<u32>,
    ) -> String {
        match victim {
            Some(victim) => format!(
                "Foul by {} ({}) on {}",
                self.player_name(fouling, fouler),
                self.team_name(fouling),
                self.player_name(fouling.other(), victim),
            ),
            None => format!(
                "Foul by {} ({})",
                self.player_name(fouling, fouler),
                self.team_name(fouling),
            ),
        }
    }

    pub(crate) fn narrate_yellow_card(
        &self,
        side: TeamSide,
        player: u32,
        second: bool,
    ) -> String {
        if second {
            format!(
                "Second yellow card for {} ({})",
                self.player_name(side, player),
                self.team_name(side),
            )
        } else {
            format!(
                "Yellow card for {} ({})",
                self.player_name(side, player),
                self.team_name(side),
            )
        }
    }

    pub(crate) fn narrate_red_card(
        &self,
        side: TeamSide,
        player: u32,
        second_yellow: bool,
    ) -> String {
        let name = self.player_name(side, player);
        if second_yellow {
            format!("{} ({}) is sent off for a second booking", name, self.team_name(side))
        } else {
            format!("Straight red card! {} ({}) is dismissed", name, self.team_name(side))
        }
    }

    pub(crate) fn narrate_offside(&self, side: TeamSide, player: u32) -> String {
        format!(
            "{} ({}) is flagged offside",
            self.player_name(side, player),
            self.team_name(side),
        )
    }

    pub(crate) fn narrate_corner(&self, side: TeamSide, conceder: Option<u32>) -> String {
        match conceder {
            Some(conceder) => format!(
                "Corner to {}, conceded by {}",
                self.team_name(side),
                self.player_name(side.other(), conceder),
            ),
            None => format!("Corner to {}", self.team_name(side)),
        }
    }

    pub(crate) fn narrate_injury(
        &self,
        side: TeamSide,
        player: u32,
        severity: InjurySeverity,
    ) -> String {
        let name = self.player_name(side, player);
        match severity {
            InjurySeverity::Momentary => {
                format!("{} ({}) is down after a knock", name, self.team_name(side))
            }
            InjurySeverity::Temporary => {
                format!("{} ({}) is hurt and cannot continue", name, self.team_name(side))
            }
            InjurySeverity::GameEnding => {
                format!("{} ({}) is seriously injured", name, self.team_name(side))
            }
        }
    }

    pub(crate) fn narrate_play_resumes(&self, _side: TeamSide) -> String {
        "Play resumes".to_string()
    }

    pub(crate) fn narrate_substitution(&self, side: TeamSide, decision: &SubDecision) -> String {
        format!(
            "Substitution for {}: {} replaces {}",
            self.team_name(side),
            self.player_name(side, decision.player_in),
            self.player_name(side, decision.player_out),
        )
    }

    pub(crate) fn narrate_penalty_kick(
        &self,
        side: TeamSide,
        kicker: u32,
        converted: bool,
        score: &SidePair<u8>,
    ) -> String {
        let name = self.player_name(side, kicker);
        if converted {
            format!(
                "{} ({}) converts! Shootout {}-{}",
                name,
                self.team_name(side),
                score[TeamSide::Home],
                score[TeamSide::Away],
            )
        } else {
            format!(
                "{} ({}) fails to convert! Shootout {}-{}",
                name,
                self.team_name(side),
                score[TeamSide::Home],
                score[TeamSide::Away],
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_plan;
    use super::*;
    use crate::engine::match_sim::MatchEngine;

    #[test]
    fn test_goal_line_names_scorer_and_creator() {
        let engine = MatchEngine::new(test_plan(71)).unwrap();
        let line = engine.narrate_goal(
            TeamSide::Home,
            109,
            Some(107),
            ShotQuality::Full,
            StrikeType::Header,
        );
        assert!(line.contains("GOAL!"));
        assert!(line.contains("Home 9"));
        assert!(line.contains("Home 7"));
        assert!(line.contains("header"));
    }

    #[test]
    fn test_save_line_names_the_opposing_keeper() {
        let engine = MatchEngine::new(test_plan(72)).unwrap();
        let line = engine.narrate_shot_saved(
            TeamSide::Away,
            209,
            100,
            ShotQuality::Half,
            StrikeType::RightFoot,
        );
        assert!(line.contains("Away 9"));
        assert!(line.contains("Home 0"), "home keeper makes the save");
    }

    #[test]
    fn test_unknown_player_id_renders_as_number() {
        let engine = MatchEngine::new(test_plan(73)).unwrap();
        let line = engine.narrate_offside(TeamSide::Home, 9999);
        assert!(line.contains("#9999"));
    }
}
