/// Dispatch of front-end commands to the scoreboard.
pub mod command_service;
/// Team name canonicalization.
pub mod naming;
/// Summary ordering rules.
pub mod ordering;
/// Match lifecycle and summary operations.
pub mod scoreboard_service;
/// Recognized team lookup.
pub mod team_validator;
