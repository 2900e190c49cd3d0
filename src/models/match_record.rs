//! Match documents: the append-only game log and the submission payload.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match document.
pub type MatchId = Uuid;

/// One recorded game. Immutable once written; there is no edit or delete
/// path, so the log is append-only.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: MatchId,
    pub player1: String,
    pub player2: String,
    pub score1: u32,
    pub score2: u32,
    /// Date the match was played, `YYYY-MM-DD`.
    pub match_date: String,
    /// Server clock at submission, milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// Incoming match submission from the entry form. Scores are typed
/// integers at the boundary, so non-numeric input never reaches storage.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSubmission {
    pub player1: String,
    pub player2: String,
    pub score1: u32,
    pub score2: u32,
    pub match_date: String,
}
