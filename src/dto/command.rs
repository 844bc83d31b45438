use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Eq)]
/// Commands accepted by the line-oriented front end, one JSON object per line.
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScoreboardCommand {
    /// Open a match.
    Start {
        /// Home team name as typed.
        #[serde(default)]
        home: Option<String>,
        /// Away team name as typed.
        #[serde(default)]
        away: Option<String>,
    },
    /// Replace the score of an active match.
    Update {
        /// Home team name as typed.
        #[serde(default)]
        home: Option<String>,
        /// Away team name as typed.
        #[serde(default)]
        away: Option<String>,
        /// New home score.
        home_score: i64,
        /// New away score.
        away_score: i64,
    },
    /// Close an active match.
    Finish {
        /// Home team name as typed.
        #[serde(default)]
        home: Option<String>,
        /// Away team name as typed.
        #[serde(default)]
        away: Option<String>,
    },
    /// List active matches in summary order.
    Summary,
}
