use crate::{
    dto::{command::ScoreboardCommand, response::CommandResponse},
    services::scoreboard_service,
    state::SharedState,
};

/// Run one decoded command against the scoreboard. Missing names count as blank.
pub async fn execute(state: &SharedState, command: ScoreboardCommand) -> CommandResponse {
    let outcome = match command {
        ScoreboardCommand::Start { home, away } => {
            scoreboard_service::start_match(state, name(&home), name(&away)).await
        }
        ScoreboardCommand::Update {
            home,
            away,
            home_score,
            away_score,
        } => {
            scoreboard_service::update_score(
                state,
                name(&home),
                name(&away),
                home_score,
                away_score,
            )
            .await
        }
        ScoreboardCommand::Finish { home, away } => {
            scoreboard_service::finish_match(state, name(&home), name(&away)).await
        }
        ScoreboardCommand::Summary => {
            return match scoreboard_service::summary(state).await {
                Ok(lines) => CommandResponse::summary(lines),
                Err(err) => err.into(),
            };
        }
    };

    match outcome {
        Ok(()) => CommandResponse::ok(),
        Err(err) => err.into(),
    }
}

/// Decode a JSON line and run it; undecodable lines become `bad_request` responses.
pub async fn execute_line(state: &SharedState, line: &str) -> CommandResponse {
    match serde_json::from_str::<ScoreboardCommand>(line) {
        Ok(command) => execute(state, command).await,
        Err(err) => CommandResponse::bad_request(format!("invalid command: {err}")),
    }
}

fn name(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}
