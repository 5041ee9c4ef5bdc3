//! JSON façade over the match engine.
//!
//! One string in, one string out, so embedders only need a JSON codec on
//! their side. Schema changes bump `SCHEMA_VERSION`; requests carrying a
//! different version are rejected rather than misread.

use crate::engine::{MatchEngine, MatchPlan};
use crate::error::{MatchError, Result};
use crate::models::{MatchResult, Team};
use serde::{Deserialize, Serialize};

/// Version of the request/response JSON shape.
pub const SCHEMA_VERSION: u8 = 1;

fn default_schema_version() -> u8 {
    SCHEMA_VERSION
}

/// A full match request: two rosters and the simulation seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub seed: u64,
    pub home_team: Team,
    pub away_team: Team,
}

impl MatchRequest {
    pub fn validate(&self) -> Result<()> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(MatchError::ValidationError(format!(
                "unsupported schema version {} (expected {})",
                self.schema_version, SCHEMA_VERSION
            )));
        }
        self.home_team.validate()?;
        self.away_team.validate()?;
        Ok(())
    }
}

/// Run one match from a parsed request.
pub fn simulate_match(request: MatchRequest) -> Result<MatchResult> {
    request.validate()?;
    log::info!(
        "simulating {} vs {} (seed {})",
        request.home_team.name,
        request.away_team.name,
        request.seed
    );
    let engine = MatchEngine::new(MatchPlan {
        home_team: request.home_team,
        away_team: request.away_team,
        seed: request.seed,
    })?;
    Ok(engine.simulate())
}

/// Run one match from request JSON and return result JSON.
pub fn simulate_match_json(request_json: &str) -> Result<String> {
    let request: MatchRequest = serde_json::from_str(request_json)?;
    let result = simulate_match(request)?;
    Ok(serde_json::to_string(&result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Formation, Player, PlayerAttributes, Position, TeamTactics};

    fn request_team(id: u32, name: &str, id_base: u32) -> Team {
        let mut positions = vec![Position::GK];
        positions.extend([Position::LB, Position::CB, Position::CB, Position::RB]);
        positions.extend([Position::CM, Position::CM, Position::LM, Position::RM]);
        positions.extend([Position::ST, Position::ST]);
        positions.extend([Position::GK, Position::CB, Position::CM, Position::ST]);
        Team {
            id,
            name: name.to_string(),
            formation: Formation::F442,
            players: positions
                .into_iter()
                .enumerate()
                .map(|(i, pos)| {
                    let mut p = Player::new(id_base + i as u32, format!("{} {}", name, i), pos);
                    p.attributes = PlayerAttributes::uniform(50);
                    p
                })
                .collect(),
            tactics: TeamTactics::default(),
        }
    }

    fn request(seed: u64) -> MatchRequest {
        MatchRequest {
            schema_version: SCHEMA_VERSION,
            seed,
            home_team: request_team(1, "Home", 100),
            away_team: request_team(2, "Away", 200),
        }
    }

    #[test]
    fn test_json_round_trip_produces_a_result() {
        let json = serde_json::to_string(&request(7)).unwrap();
        let out = simulate_match_json(&json).unwrap();
        let result: MatchResult = serde_json::from_str(&out).unwrap();
        assert_eq!(result.home_team_id, 1);
        assert_eq!(result.away_team_id, 2);
        assert!(!result.events.is_empty());
    }

    #[test]
    fn test_schema_version_mismatch_rejected() {
        let mut req = request(8);
        req.schema_version = 99;
        let json = serde_json::to_string(&req).unwrap();
        assert!(matches!(
            simulate_match_json(&json),
            Err(MatchError::ValidationError(_))
        ));
    }

    #[test]
    fn test_missing_schema_version_defaults_to_current() {
        let mut value: serde_json::Value =
            serde_json::to_value(request(9)).unwrap();
        value.as_object_mut().unwrap().remove("schema_version");
        let req: MatchRequest = serde_json::from_value(value).unwrap();
        assert_eq!(req.schema_version, SCHEMA_VERSION);
    }

    #[test]
    fn test_malformed_json_is_a_deserialization_error() {
        assert!(matches!(
            simulate_match_json("{not json"),
            Err(MatchError::DeserializationError(_))
        ));
    }

    #[test]
    fn test_short_roster_rejected() {
        let mut req = request(10);
        req.home_team.players.truncate(5);
        assert!(simulate_match(req).is_err());
    }
}
