//! Player document: base counters only, derived stats computed on read.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player document.
pub type PlayerId = Uuid;

/// A player's cumulative record. Only the four base counters are stored;
/// `winPct` and `pointDiff` are always derived from them so the stored
/// values can never drift apart.
///
/// Numeric fields default to 0 when missing from a snapshot.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub points_scored: u32,
    #[serde(default)]
    pub points_against: u32,
}

impl Player {
    /// Create a new player with the given name. All counters start at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            wins: 0,
            losses: 0,
            points_scored: 0,
            points_against: 0,
        }
    }

    /// Apply one game from this player's perspective. A strictly higher
    /// score is a win; anything else counts as a loss.
    pub fn record_game(&mut self, points_scored: u32, points_against: u32) {
        if points_scored > points_against {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.points_scored += points_scored;
        self.points_against += points_against;
    }

    /// Win percentage in [0, 100]; 0 when no games have been played.
    pub fn win_pct(&self) -> f64 {
        let played = self.wins + self.losses;
        if played == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(played) * 100.0
        }
    }

    /// Career point differential (can be negative).
    pub fn point_diff(&self) -> i64 {
        i64::from(self.points_scored) - i64::from(self.points_against)
    }
}
