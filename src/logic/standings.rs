//! Standings computation: per-player rows with derived stats and SoS.

use crate::models::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// One row of the standings table. `winPct`, `pointDiff`, and `sos` are
/// derived from the base counters at build time and never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    pub id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub win_pct: f64,
    pub points_scored: u32,
    pub points_against: u32,
    pub point_diff: i64,
    pub sos: f64,
}

/// Build standings rows from the player collection, one per document, in the
/// order given (the collection's insertion order unless the caller sorts).
pub fn standings(players: &[Player]) -> Vec<StandingsRow> {
    players
        .iter()
        .map(|p| StandingsRow {
            id: p.id,
            name: p.name.clone(),
            wins: p.wins,
            losses: p.losses,
            win_pct: p.win_pct(),
            points_scored: p.points_scored,
            points_against: p.points_against,
            point_diff: p.point_diff(),
            sos: strength_of_schedule(players, p.id),
        })
        .collect()
}

/// Strength of schedule for one player: the mean win percentage of every
/// OTHER player, from raw win/loss counts. Self-exclusion is by document id,
/// so two players who happen to share a name still count for each other.
/// With no other players there is nothing to average and the SoS is 0.
pub fn strength_of_schedule(players: &[Player], player: PlayerId) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for p in players.iter().filter(|p| p.id != player) {
        sum += p.win_pct();
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Render a win percentage the way the table shows it: two decimals, `%`.
pub fn format_pct(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Render an SoS value: two decimals, no suffix.
pub fn format_sos(value: f64) -> String {
    format!("{:.2}", value)
}
