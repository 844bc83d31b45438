use tracing::{debug, info};

use crate::{
    dao::{match_store::MatchKey, models::MatchRecord},
    error::ScoreboardError,
    services::{naming::normalize, ordering::sort_for_summary},
    state::SharedState,
};

/// Open a 0-0 match between two recognized teams that are not playing yet.
pub async fn start_match(
    state: &SharedState,
    home: &str,
    away: &str,
) -> Result<(), ScoreboardError> {
    let _gate = state.lock().await;
    let (home_team, away_team) = resolve_pair(state, home, away)?;

    if home_team == away_team {
        return Err(ScoreboardError::InvalidInput(format!(
            "team `{home_team}` cannot play against itself"
        )));
    }

    let active = state.store().find_all().await?;
    for team in [&home_team, &away_team] {
        if active.iter().any(|record| record.involves(team)) {
            debug!(team = %team, "rejecting start: team already playing");
            return Err(ScoreboardError::ConflictingParticipant(team.clone()));
        }
    }

    let record = MatchRecord::started(home_team, away_team, state.now(), state.next_sequence());
    let key = MatchKey::of(&record);
    state.store().save(key.clone(), record).await?;
    info!(match_key = %key, "match started");
    Ok(())
}

/// Replace the score of an active match.
pub async fn update_score(
    state: &SharedState,
    home: &str,
    away: &str,
    home_score: i64,
    away_score: i64,
) -> Result<(), ScoreboardError> {
    let _gate = state.lock().await;
    let (home_team, away_team) = resolve_pair(state, home, away)?;
    let key = MatchKey::new(&home_team, &away_team);

    let Some(record) = state.store().find(&key).await? else {
        return Err(ScoreboardError::NotFound {
            home: home_team,
            away: away_team,
        });
    };

    let updated = record.with_scores(checked_score(home_score)?, checked_score(away_score)?);
    let (home_score, away_score) = (updated.home_score, updated.away_score);
    state.store().save(key.clone(), updated).await?;
    info!(match_key = %key, home_score, away_score, "score updated");
    Ok(())
}

/// Close an active match, removing it from the scoreboard.
pub async fn finish_match(
    state: &SharedState,
    home: &str,
    away: &str,
) -> Result<(), ScoreboardError> {
    let _gate = state.lock().await;
    let (home_team, away_team) = resolve_pair(state, home, away)?;
    let key = MatchKey::new(&home_team, &away_team);

    if state.store().find(&key).await?.is_none() {
        return Err(ScoreboardError::NotFound {
            home: home_team,
            away: away_team,
        });
    }

    state.store().remove(&key).await?;
    info!(home = %home_team, away = %away_team, "match finished");
    Ok(())
}

/// Active matches in summary order.
pub async fn summary_entries(state: &SharedState) -> Result<Vec<MatchRecord>, ScoreboardError> {
    let _gate = state.lock().await;
    let mut records = state.store().find_all().await?;
    sort_for_summary(&mut records);
    Ok(records)
}

/// Active matches in summary order, one `"<Home> <h> - <Away> <a>"` line each.
pub async fn summary(state: &SharedState) -> Result<Vec<String>, ScoreboardError> {
    let records = summary_entries(state).await?;
    Ok(records.iter().map(ToString::to_string).collect())
}

/// Reject blank names, then normalize and validate both sides.
fn resolve_pair(
    state: &SharedState,
    home: &str,
    away: &str,
) -> Result<(String, String), ScoreboardError> {
    if home.trim().is_empty() || away.trim().is_empty() {
        return Err(ScoreboardError::InvalidInput(
            "team name cannot be empty".into(),
        ));
    }
    Ok((known_team(state, home)?, known_team(state, away)?))
}

fn known_team(state: &SharedState, raw: &str) -> Result<String, ScoreboardError> {
    let normalized = normalize(raw);
    if state.validator().is_known(&normalized) {
        Ok(normalized)
    } else {
        debug!(team = %raw, "unknown team");
        Err(ScoreboardError::UnknownEntity(raw.to_string()))
    }
}

fn checked_score(score: i64) -> Result<u32, ScoreboardError> {
    if score < 0 {
        return Err(ScoreboardError::InvalidInput("score cannot be negative".into()));
    }
    u32::try_from(score)
        .map_err(|_| ScoreboardError::InvalidInput(format!("score {score} is out of range")))
}
