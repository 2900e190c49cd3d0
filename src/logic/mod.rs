//! League business logic: standings, match recording, table sorting.

mod record;
mod sort;
mod standings;

pub use record::{record_match, validate_submission, LeagueError, MatchOutcome};
pub use sort::{cell_text, sort_rows, Direction, SortState, COLUMN_COUNT};
pub use standings::{format_pct, format_sos, standings, strength_of_schedule, StandingsRow};
