//! Conversation session management.
//!
//! A `Session` holds the persona configuration, the credential and the
//! conversation log, and drives one completion request per user turn.

mod chat;
mod manager;
mod types;

#[cfg(test)]
mod tests;

pub use manager::Session;
pub use types::{SessionError, SessionMetrics, SessionSummary, Turn, TurnRole};
