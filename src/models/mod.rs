//! Data structures for the league: player documents and the match log.

mod match_record;
mod player;

pub use match_record::{MatchId, MatchRecord, MatchSubmission};
pub use player::{Player, PlayerId};
