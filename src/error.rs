use thiserror::Error;

use crate::dao::storage::StorageError;

/// Failures reported by scoreboard operations.
///
/// Each variant carries the offending team name(s) so callers can word their own message.
#[derive(Debug, Error)]
pub enum ScoreboardError {
    /// Blank team name, same team on both sides, or a score out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Team name not present in the reference list (raw input as given by the caller).
    #[error("team `{0}` does not exist")]
    UnknownEntity(String),
    /// Team already playing in another active match.
    #[error("team `{0}` is already in a match")]
    ConflictingParticipant(String),
    /// No active match for this home/away pair.
    #[error("match `{home} - {away}` does not exist")]
    NotFound {
        /// Normalized home team.
        home: String,
        /// Normalized away team.
        away: String,
    },
    /// Match store failed.
    #[error("storage unavailable")]
    Unavailable(#[source] StorageError),
}

impl ScoreboardError {
    /// Stable tag identifying the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ScoreboardError::InvalidInput(_) => "invalid_input",
            ScoreboardError::UnknownEntity(_) => "unknown_entity",
            ScoreboardError::ConflictingParticipant(_) => "conflicting_participant",
            ScoreboardError::NotFound { .. } => "not_found",
            ScoreboardError::Unavailable(_) => "unavailable",
        }
    }
}

impl From<StorageError> for ScoreboardError {
    fn from(err: StorageError) -> Self {
        ScoreboardError::Unavailable(err)
    }
}
