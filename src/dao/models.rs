use std::fmt;

use time::OffsetDateTime;

/// Current state of one active match.
///
/// Persisted by a [`MatchStore`](super::match_store::MatchStore).
///
/// Scores are only replaced through [`MatchRecord::with_scores`]; the combined total is always
/// derived from them and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Normalized name of the home team.
    pub home_team: String,
    /// Normalized name of the away team.
    pub away_team: String,
    /// Goals scored by the home team.
    pub home_score: u32,
    /// Goals scored by the away team.
    pub away_score: u32,
    /// Moment the match was started.
    pub started_at: OffsetDateTime,
    /// Start order assigned by the scoreboard, used as the last tie-break.
    pub sequence: u64,
}

impl MatchRecord {
    /// Fresh 0-0 record for a match starting now.
    pub fn started(
        home_team: String,
        away_team: String,
        started_at: OffsetDateTime,
        sequence: u64,
    ) -> Self {
        Self {
            home_team,
            away_team,
            home_score: 0,
            away_score: 0,
            started_at,
            sequence,
        }
    }

    /// Copy of this record carrying the new scores; identity and start time are kept.
    pub fn with_scores(&self, home_score: u32, away_score: u32) -> Self {
        Self {
            home_score,
            away_score,
            ..self.clone()
        }
    }

    /// Combined score of both teams.
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }

    /// Whether `team` plays in this match, home or away.
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}
