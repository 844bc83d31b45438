use serde::Serialize;

use crate::error::ScoreboardError;

#[derive(Debug, Serialize, PartialEq, Eq)]
/// Reply written for every command line.
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandResponse {
    /// Command applied. `summary` is only present for summary requests.
    Ok {
        /// Ordered summary lines.
        #[serde(skip_serializing_if = "Option::is_none")]
        summary: Option<Vec<String>>,
    },
    /// Command rejected.
    Error {
        /// Stable failure tag, e.g. `not_found`.
        kind: String,
        /// Human readable description.
        message: String,
    },
}

impl CommandResponse {
    /// Successful command without payload.
    pub fn ok() -> Self {
        Self::Ok { summary: None }
    }

    /// Successful summary request.
    pub fn summary(lines: Vec<String>) -> Self {
        Self::Ok {
            summary: Some(lines),
        }
    }

    /// Line that could not be decoded into a command.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Error {
            kind: "bad_request".into(),
            message: message.into(),
        }
    }
}

impl From<ScoreboardError> for CommandResponse {
    fn from(err: ScoreboardError) -> Self {
        Self::Error {
            kind: err.kind().into(),
            message: err.to_string(),
        }
    }
}
