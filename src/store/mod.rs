//! In-process document store for the two league collections.
//!
//! Holds `players` (one document per player, never deleted) and `matches`
//! (append-only log) behind a single `RwLock`. Player lookup goes through a
//! name index rather than a scan, and every counter update runs under one
//! write-lock acquisition, so two overlapping submissions cannot lose an
//! increment the way independent read-modify-write sequences can.
//!
//! The store can snapshot both collections to a JSON file and load them back
//! on startup; without a snapshot path it is purely in-memory.

use crate::models::{MatchRecord, Player, PlayerId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::RwLock;

/// Errors from store operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StoreError {
    /// The store lock was poisoned by a panicking writer.
    Poisoned,
    /// Reading or writing the JSON snapshot failed.
    Snapshot(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Poisoned => write!(f, "store lock poisoned"),
            StoreError::Snapshot(msg) => write!(f, "snapshot error: {}", msg),
        }
    }
}

/// Both collections plus the name index. Players keep insertion order, which
/// is the unsorted order the standings endpoint reports.
#[derive(Default, Serialize, Deserialize)]
struct StoreInner {
    players: Vec<Player>,
    matches: Vec<MatchRecord>,
    /// Player name -> index into `players`. Indices are stable because
    /// players are never deleted. Rebuilt after loading a snapshot.
    #[serde(skip)]
    by_name: HashMap<String, usize>,
}

impl StoreInner {
    fn rebuild_index(&mut self) {
        self.by_name = self
            .players
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.clone(), i))
            .collect();
    }

    /// Find-or-create by exact name, then apply one game result. The caller
    /// holds the write lock, so the whole sequence is a single atomic step.
    fn upsert_and_apply(&mut self, name: &str, scored: u32, against: u32) -> Player {
        let idx = match self.by_name.get(name) {
            Some(&i) => i,
            None => {
                self.players.push(Player::new(name));
                let i = self.players.len() - 1;
                self.by_name.insert(name.to_string(), i);
                i
            }
        };
        let p = &mut self.players[idx];
        p.record_game(scored, against);
        p.clone()
    }
}

/// Thread-safe store shared across request handlers.
#[derive(Default)]
pub struct LeagueStore {
    inner: RwLock<StoreInner>,
}

impl LeagueStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a JSON snapshot. A missing file yields an empty
    /// store (first run); a malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            log::info!("No snapshot at {}, starting empty", path.display());
            return Ok(Self::new());
        }
        let data = fs::read_to_string(path).map_err(|e| StoreError::Snapshot(e.to_string()))?;
        let mut inner: StoreInner =
            serde_json::from_str(&data).map_err(|e| StoreError::Snapshot(e.to_string()))?;
        inner.rebuild_index();
        log::info!(
            "Loaded snapshot: {} player(s), {} match(es)",
            inner.players.len(),
            inner.matches.len()
        );
        Ok(Self {
            inner: RwLock::new(inner),
        })
    }

    /// Write both collections to a JSON snapshot file.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let g = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        let json =
            serde_json::to_string_pretty(&*g).map_err(|e| StoreError::Snapshot(e.to_string()))?;
        fs::write(path, json).map_err(|e| StoreError::Snapshot(e.to_string()))
    }

    /// All player documents in insertion order.
    pub fn list_players(&self) -> Result<Vec<Player>, StoreError> {
        let g = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(g.players.clone())
    }

    /// The full match log in submission order.
    pub fn list_matches(&self) -> Result<Vec<MatchRecord>, StoreError> {
        let g = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(g.matches.clone())
    }

    /// Fetch one player document by id.
    pub fn get_player(&self, id: PlayerId) -> Result<Option<Player>, StoreError> {
        let g = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(g.players.iter().find(|p| p.id == id).cloned())
    }

    /// Indexed lookup by exact name.
    pub fn get_player_by_name(&self, name: &str) -> Result<Option<Player>, StoreError> {
        let g = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(g.by_name.get(name).map(|&i| g.players[i].clone()))
    }

    /// Overwrite a player document wholesale (create it if the id is new).
    ///
    /// This is the raw two-step primitive: a get followed by a put is NOT
    /// atomic, and concurrent callers can overwrite each other's counters.
    /// Submissions must go through [`apply_match`](Self::apply_match) or
    /// [`update_player`](Self::update_player) instead.
    pub fn put_player(&self, player: Player) -> Result<(), StoreError> {
        let mut g = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let inner = &mut *g;
        match inner.players.iter().position(|p| p.id == player.id) {
            Some(i) => {
                let old_name = inner.players[i].name.clone();
                inner.by_name.remove(&old_name);
                inner.by_name.insert(player.name.clone(), i);
                inner.players[i] = player;
            }
            None => {
                inner.by_name.insert(player.name.clone(), inner.players.len());
                inner.players.push(player);
            }
        }
        Ok(())
    }

    /// Find-or-create a player by name and apply one game result, all under
    /// one write lock. Returns the updated document.
    pub fn update_player(
        &self,
        name: &str,
        points_scored: u32,
        points_against: u32,
    ) -> Result<Player, StoreError> {
        let mut g = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        Ok(g.upsert_and_apply(name, points_scored, points_against))
    }

    /// Record a match: append the log entry and apply the result to both
    /// players under a single write lock, so the log and the counters can
    /// never diverge partway.
    pub fn apply_match(&self, record: MatchRecord) -> Result<(Player, Player), StoreError> {
        let mut g = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let p1 = g.upsert_and_apply(&record.player1, record.score1, record.score2);
        let p2 = g.upsert_and_apply(&record.player2, record.score2, record.score1);
        g.matches.push(record);
        Ok((p1, p2))
    }
}
