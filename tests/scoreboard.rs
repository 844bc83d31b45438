use std::sync::Arc;

use live_scoreboard::{
    config::AppConfig,
    dao::match_store::{InMemoryMatchStore, MatchKey, MatchStore},
    error::ScoreboardError,
    services::{naming::normalize, scoreboard_service},
    state::{
        ScoreboardState, SharedState,
        clock::{Clock, ManualClock},
    },
};
use time::{Duration, OffsetDateTime};

struct Fixture {
    state: SharedState,
    store: InMemoryMatchStore,
    clock: Arc<ManualClock>,
}

impl Fixture {
    fn new() -> Self {
        let store = InMemoryMatchStore::new();
        let clock = Arc::new(ManualClock::new(OffsetDateTime::UNIX_EPOCH));
        let state = ScoreboardState::with_clock(
            Arc::new(store.clone()),
            Arc::new(AppConfig::default().reference_teams()),
            clock.clone(),
        );
        Self {
            state,
            store,
            clock,
        }
    }

    /// Start a match one millisecond after the previous one and set its score.
    async fn play(&self, home: &str, away: &str, home_score: i64, away_score: i64) {
        self.clock.advance(Duration::milliseconds(1));
        scoreboard_service::start_match(&self.state, home, away)
            .await
            .unwrap();
        scoreboard_service::update_score(&self.state, home, away, home_score, away_score)
            .await
            .unwrap();
    }

    async fn summary(&self) -> Vec<String> {
        scoreboard_service::summary(&self.state).await.unwrap()
    }
}

#[tokio::test]
async fn started_match_shows_nil_nil() {
    let fixture = Fixture::new();
    scoreboard_service::start_match(&fixture.state, "spain", " ITALY ")
        .await
        .unwrap();
    assert_eq!(fixture.summary().await, ["Spain 0 - Italy 0"]);
}

#[tokio::test]
async fn conflicting_start_leaves_store_unchanged() {
    let fixture = Fixture::new();
    scoreboard_service::start_match(&fixture.state, "Spain", "Italy")
        .await
        .unwrap();

    let err = scoreboard_service::start_match(&fixture.state, "Spain", "Denmark")
        .await
        .unwrap_err();
    assert!(matches!(err, ScoreboardError::ConflictingParticipant(ref team) if team == "Spain"));
    assert_eq!(err.to_string(), "team `Spain` is already in a match");
    assert_eq!(fixture.store.len(), 1);
    assert_eq!(fixture.summary().await, ["Spain 0 - Italy 0"]);
}

#[tokio::test]
async fn update_failures_keep_previous_record() {
    let fixture = Fixture::new();
    let err = scoreboard_service::update_score(&fixture.state, "Spain", "Italy", 1, 0)
        .await
        .unwrap_err();
    assert!(matches!(err, ScoreboardError::NotFound { .. }));

    fixture.play("Spain", "Italy", 2, 1).await;
    let before = fixture
        .store
        .find(&MatchKey::new("Spain", "Italy"))
        .await
        .unwrap();

    let err = scoreboard_service::update_score(&fixture.state, "Spain", "Italy", -2, 0)
        .await
        .unwrap_err();
    assert!(matches!(err, ScoreboardError::InvalidInput(_)));
    let after = fixture
        .store
        .find(&MatchKey::new("Spain", "Italy"))
        .await
        .unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn update_keeps_identity_and_start_time() {
    let fixture = Fixture::new();
    fixture.play("Spain", "Italy", 0, 0).await;
    let started_at = fixture.clock.now();

    fixture.clock.advance(Duration::minutes(30));
    scoreboard_service::update_score(&fixture.state, "Spain", "Italy", 4, 2)
        .await
        .unwrap();

    let records = scoreboard_service::summary_entries(&fixture.state)
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].started_at, started_at);
    assert_eq!(records[0].total_score(), 6);
    assert_eq!(MatchKey::of(&records[0]), MatchKey::new("Spain", "Italy"));
    assert_eq!(fixture.summary().await, ["Spain 4 - Italy 2"]);
}

#[tokio::test]
async fn finish_removes_exactly_that_match() {
    let fixture = Fixture::new();
    fixture.play("Spain", "Italy", 1, 0).await;
    fixture.play("Germany", "France", 0, 0).await;

    scoreboard_service::finish_match(&fixture.state, "Spain", "Italy")
        .await
        .unwrap();
    assert_eq!(fixture.summary().await, ["Germany 0 - France 0"]);

    let err = scoreboard_service::finish_match(&fixture.state, "Spain", "Italy")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "match `Spain - Italy` does not exist");
}

#[test]
fn normalization_is_case_and_whitespace_insensitive() {
    assert_eq!(normalize("  bRaZil "), normalize("Brazil"));
    assert_eq!(normalize("Brazil"), "Brazil");
    assert_eq!(normalize(&normalize("  soUTH   sudan")), "South Sudan");
}

#[tokio::test]
async fn equal_totals_rank_latest_start_first() {
    let fixture = Fixture::new();
    fixture.play("Mexico", "Canada", 0, 5).await;
    fixture.play("Spain", "Brazil", 10, 2).await;
    fixture.play("Germany", "France", 2, 2).await;
    fixture.play("Uruguay", "Italy", 6, 6).await;
    fixture.play("Argentina", "Australia", 3, 1).await;

    assert_eq!(
        fixture.summary().await,
        [
            "Uruguay 6 - Italy 6",
            "Spain 10 - Brazil 2",
            "Mexico 0 - Canada 5",
            "Argentina 3 - Australia 1",
            "Germany 2 - France 2",
        ]
    );
}

#[tokio::test]
async fn identical_start_times_keep_start_order() {
    let fixture = Fixture::new();
    for (home, away) in [("Spain", "Italy"), ("Germany", "France"), ("Mexico", "Canada")] {
        scoreboard_service::start_match(&fixture.state, home, away)
            .await
            .unwrap();
    }

    assert_eq!(
        fixture.summary().await,
        [
            "Spain 0 - Italy 0",
            "Germany 0 - France 0",
            "Mexico 0 - Canada 0",
        ]
    );
}

#[tokio::test]
async fn repeated_updates_leave_a_single_entry() {
    let fixture = Fixture::new();
    fixture.play("Spain", "Italy", 1, 0).await;
    for (home_score, away_score) in [(1, 1), (2, 1), (3, 1)] {
        scoreboard_service::update_score(&fixture.state, "Spain", "Italy", home_score, away_score)
            .await
            .unwrap();
    }
    assert_eq!(fixture.summary().await, ["Spain 3 - Italy 1"]);
}

#[tokio::test]
async fn scoreboards_are_independent() {
    let first = Fixture::new();
    let second = Fixture::new();
    first.play("Spain", "Italy", 1, 0).await;

    assert!(second.summary().await.is_empty());
    scoreboard_service::start_match(&second.state, "Spain", "Italy")
        .await
        .unwrap();
    assert_eq!(second.summary().await, ["Spain 0 - Italy 0"]);
}

#[tokio::test]
async fn predicate_validator_is_injectable() {
    let state = ScoreboardState::in_memory(Arc::new(|name: &str| name.len() > 3));

    scoreboard_service::start_match(&state, "home", "away")
        .await
        .unwrap();
    let err = scoreboard_service::start_match(&state, "foo", "bars")
        .await
        .unwrap_err();
    assert!(matches!(err, ScoreboardError::UnknownEntity(ref raw) if raw == "foo"));
    assert_eq!(
        scoreboard_service::summary(&state).await.unwrap(),
        ["Home 0 - Away 0"]
    );
}
