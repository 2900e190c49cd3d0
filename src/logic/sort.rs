//! Table sorter: reorder standings rows by a clicked column.
//!
//! Comparison works on the rendered cell text: numeric when both cells parse
//! as numbers, lexicographic otherwise. The `winPct` column carries a `%`
//! suffix, so it falls back to string comparison like the name column. The
//! sort itself is stable.

use crate::logic::standings::{format_pct, format_sos, StandingsRow};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Number of sortable columns:
/// {name, wins, losses, winPct, pointsScored, pointsAgainst, pointDiff, sos}.
pub const COLUMN_COUNT: usize = 8;

/// Sort direction for a column.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// Per-header toggle state. Each header remembers its own last direction, so
/// clicking header B and coming back to header A resumes A's toggle rather
/// than restarting it; only the most recently clicked header shows a marker.
#[derive(Clone, Debug, Default)]
pub struct SortState {
    directions: [Option<Direction>; COLUMN_COUNT],
    active: Option<usize>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a click on a column header and return the direction to sort
    /// by: the flip of that header's own previous direction, ascending on
    /// its first click.
    pub fn click(&mut self, column: usize) -> Direction {
        let next = match self.directions[column] {
            Some(dir) => dir.flip(),
            None => Direction::Ascending,
        };
        self.directions[column] = Some(next);
        self.active = Some(column);
        next
    }

    /// The column whose marker is currently shown, with its direction.
    pub fn active(&self) -> Option<(usize, Direction)> {
        let col = self.active?;
        Some((col, self.directions[col]?))
    }
}

/// The text of one rendered cell, as the comparison sees it.
pub fn cell_text(row: &StandingsRow, column: usize) -> String {
    match column {
        0 => row.name.clone(),
        1 => row.wins.to_string(),
        2 => row.losses.to_string(),
        3 => format_pct(row.win_pct),
        4 => row.points_scored.to_string(),
        5 => row.points_against.to_string(),
        6 => row.point_diff.to_string(),
        _ => format_sos(row.sos),
    }
}

fn compare_cells(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.total_cmp(&y),
        _ => a.cmp(b),
    }
}

/// Stable in-place sort of rows by the given column and direction. Rows with
/// equal cells keep their current relative order in either direction.
pub fn sort_rows(rows: &mut [StandingsRow], column: usize, direction: Direction) {
    rows.sort_by(|a, b| {
        let ord = compare_cells(
            cell_text(a, column).trim(),
            cell_text(b, column).trim(),
        );
        match direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    });
}
