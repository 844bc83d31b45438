/// Commands read from the front end.
pub mod command;
/// Replies written back to the front end.
pub mod response;
