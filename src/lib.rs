//! Ping-pong league standings web app: library with models, store, and logic.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    cell_text, format_pct, format_sos, record_match, sort_rows, standings,
    strength_of_schedule, validate_submission, Direction, LeagueError, MatchOutcome, SortState,
    StandingsRow, COLUMN_COUNT,
};
pub use models::{MatchId, MatchRecord, MatchSubmission, Player, PlayerId};
pub use store::{LeagueStore, StoreError};
