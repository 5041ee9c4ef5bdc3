use std::fmt;

#[derive(Debug)]
pub enum MatchError {
    InvalidFormation(String),
    InvalidTeamSize { expected: usize, found: usize },
    InvalidPosition(String),
    MissingGoalkeeper(String),
    ValidationError(String),
    SerializationError(String),
    DeserializationError(String),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchError::InvalidFormation(formation) => {
                write!(f, "Invalid formation: {}", formation)
            }
            MatchError::InvalidTeamSize { expected, found } => {
                write!(f, "Invalid team size: expected at least {}, found {}", expected, found)
            }
            MatchError::InvalidPosition(position) => {
                write!(f, "Invalid player position: {}", position)
            }
            MatchError::MissingGoalkeeper(team) => {
                write!(f, "No goalkeeper in starting lineup of team: {}", team)
            }
            MatchError::ValidationError(msg) => {
                write!(f, "Validation error: {}", msg)
            }
            MatchError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            MatchError::DeserializationError(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for MatchError {}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            MatchError::SerializationError(err.to_string())
        } else {
            MatchError::DeserializationError(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
