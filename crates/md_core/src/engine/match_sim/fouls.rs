//! Fouls, bookings and dismissals.
//!
//! A foul event is committed by the side out of possession against the
//! side in possession. Cards scale with the fouler's aggression; a second
//! yellow converts to a red, and dismissed players leave the engine's
//! selection pool immediately through the substitution state.

use super::shots::ShotOrigin;
use super::MatchEngine;
use crate::engine::ratings;
use crate::engine::tuning::*;
use crate::models::{EventType, TeamSide};
use rand::Rng;

impl MatchEngine {
    /// A foul against the side in possession. `attacking` is the side
    /// with the ball; the foul is committed by the other side.
    pub(crate) fn generate_foul(&mut self, attacking: TeamSide) {
        let fouling = attacking.other();
        let Some(fouler) = self.select_fouler(fouling) else {
            return;
        };
        let victim = self.select_foul_victim(attacking);

        let text = self.narrate_foul(fouling, fouler, victim);
        self.emit(EventType::Foul, fouling, Some(fouler), None, text);

        self.maybe_book(fouling, fouler);

        // Free kicks in the victim's attacking half can turn straight
        // into a chance.
        if self.rng.gen_bool(FOUL_ATTACKING_HALF_CHANCE)
            && self.rng.gen_bool(FREE_KICK_SHOT_CHANCE)
        {
            self.set_piece_shot(attacking, ShotOrigin::FreeKick);
        }
    }

    /// Card discipline for one foul. The straight-red roll sits inside
    /// the card trigger: a carded foul escalates through the second
    /// yellow when the fouler is already booked, otherwise it has a
    /// small chance of being a straight red, otherwise it is a yellow.
    fn maybe_book(&mut self, side: TeamSide, fouler: u32) {
        let aggression = self.teams[side]
            .player(fouler)
            .map(|p| ratings::aggression(&p.attributes))
            .unwrap_or(50.0);
        let card_chance = (CARD_CHANCE_BASE
            + (aggression as f64 - 50.0) / CARD_AGGRESSION_DIVISOR)
            .clamp(CARD_CHANCE_MIN, CARD_CHANCE_MAX);
        if !self.rng.gen_bool(card_chance) {
            return;
        }

        if self.sub_states[side].yellow_count(fouler) == 0
            && self.rng.gen_bool(STRAIGHT_RED_CHANCE)
        {
            self.send_off(side, fouler, false);
            return;
        }

        self.stats_mut(fouler).yellow_cards += 1;
        let second = self.subs.record_yellow_card(&mut self.sub_states[side], fouler);
        let text = self.narrate_yellow_card(side, fouler, second);
        self.emit(EventType::YellowCard, side, Some(fouler), None, text);

        if second {
            self.send_off(side, fouler, true);
        }
    }

    fn send_off(&mut self, side: TeamSide, fouler: u32, second_yellow: bool) {
        self.stats_mut(fouler).red_cards += 1;
        self.subs.handle_red_card(&mut self.sub_states[side], fouler);
        log::debug!(
            "minute {}: player {} sent off ({})",
            self.minute,
            fouler,
            if second_yellow { "second yellow" } else { "straight red" }
        );
        let text = self.narrate_red_card(side, fouler, second_yellow);
        self.emit(EventType::RedCard, side, Some(fouler), None, text);
    }

    /// The side in possession strays offside.
    pub(crate) fn generate_offside(&mut self, attacking: TeamSide) {
        let Some(player) = self.select_offside_player(attacking) else {
            return;
        };
        let text = self.narrate_offside(attacking, player);
        self.emit(EventType::Offside, attacking, Some(player), None, text);
    }
}
