//! Library crate for live-scoreboard, exposing modules for the binary and integration tests.

/// Configuration loading (reference team list).
pub mod config;
/// Match records and their persistence.
pub mod dao;
/// JSON command and response shapes of the line-oriented front end.
pub mod dto;
/// Scoreboard failure taxonomy.
pub mod error;
/// Scoreboard operations and the rules they rely on.
pub mod services;
/// Scoreboard instances and their time source.
pub mod state;
