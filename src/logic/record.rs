//! Match recording: submission validation and the two-player update.

use crate::models::{MatchRecord, MatchSubmission, Player};
use crate::store::{LeagueStore, StoreError};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Errors that can occur while recording a match.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LeagueError {
    /// A player name is empty after trimming.
    EmptyPlayerName,
    /// Both sides name the same player (case-sensitive comparison).
    IdenticalPlayers,
    /// A tied score cannot be recorded (ping-pong has no draws).
    TiedScore,
    /// The match date is not a valid `YYYY-MM-DD` date.
    InvalidDate(String),
    /// The store rejected an operation.
    Store(StoreError),
}

impl fmt::Display for LeagueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeagueError::EmptyPlayerName => write!(f, "Player names must not be empty"),
            LeagueError::IdenticalPlayers => write!(f, "A player cannot play themselves"),
            LeagueError::TiedScore => write!(f, "Tied scores cannot be recorded"),
            LeagueError::InvalidDate(d) => {
                write!(f, "Invalid match date '{}' (expected YYYY-MM-DD)", d)
            }
            LeagueError::Store(e) => write!(f, "Storage failure: {}", e),
        }
    }
}

impl From<StoreError> for LeagueError {
    fn from(e: StoreError) -> Self {
        LeagueError::Store(e)
    }
}

/// Result of a successful submission: the stored log entry plus both updated
/// player documents.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutcome {
    pub record: MatchRecord,
    pub player1: Player,
    pub player2: Player,
}

/// Validate a submission and return the trimmed names plus the parsed date.
/// No side effects: a rejected submission writes nothing.
pub fn validate_submission(
    sub: &MatchSubmission,
) -> Result<(String, String, NaiveDate), LeagueError> {
    let player1 = sub.player1.trim();
    let player2 = sub.player2.trim();
    if player1.is_empty() || player2.is_empty() {
        return Err(LeagueError::EmptyPlayerName);
    }
    if player1 == player2 {
        return Err(LeagueError::IdenticalPlayers);
    }
    if sub.score1 == sub.score2 {
        return Err(LeagueError::TiedScore);
    }
    let date = NaiveDate::parse_from_str(&sub.match_date, "%Y-%m-%d")
        .map_err(|_| LeagueError::InvalidDate(sub.match_date.clone()))?;
    Ok((player1.to_string(), player2.to_string(), date))
}

/// Record one match: validate, append the log entry, and update both players.
/// The store applies all three writes under a single lock, so a submission
/// either lands completely or not at all.
pub fn record_match(
    store: &LeagueStore,
    sub: &MatchSubmission,
) -> Result<MatchOutcome, LeagueError> {
    let (player1, player2, date) = validate_submission(sub)?;
    let record = MatchRecord {
        id: Uuid::new_v4(),
        player1,
        player2,
        score1: sub.score1,
        score2: sub.score2,
        match_date: date.to_string(),
        timestamp: Utc::now().timestamp_millis(),
    };
    let (p1, p2) = store.apply_match(record.clone())?;
    Ok(MatchOutcome {
        record,
        player1: p1,
        player2: p2,
    })
}
