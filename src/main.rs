//! Live scoreboard binary: reads JSON commands from stdin, answers one JSON line per command.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use live_scoreboard::{config::AppConfig, services::command_service, state::ScoreboardState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    let state = ScoreboardState::in_memory(Arc::new(config.reference_teams()));
    info!(teams = config.teams().len(), "scoreboard ready; reading commands from stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("reading stdin")?,
            _ = &mut shutdown => {
                info!("shutdown requested");
                break;
            }
        };
        let Some(line) = line else {
            debug!("stdin closed");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = command_service::execute_line(&state, &line).await;
        let mut payload = serde_json::to_vec(&response).context("encoding response")?;
        payload.push(b'\n');
        stdout.write_all(&payload).await.context("writing stdout")?;
        stdout.flush().await.context("flushing stdout")?;
    }

    Ok(())
}

/// Configure tracing on stderr; stdout carries responses only.
fn init_tracing() {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
