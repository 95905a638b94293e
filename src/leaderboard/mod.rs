//! In-memory leaderboard.
//!
//! Names are unique case-insensitively after trimming. Ranking is by
//! winnings, highest first; equal winnings keep recording order. Storage
//! is the host's concern.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Money;

/// Rejected leaderboard entries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeaderboardError {
    #[error("player name is empty")]
    EmptyName,
    #[error("player name {0:?} is already on the leaderboard")]
    DuplicateName(String),
}

/// One finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub winnings: Money,
}

impl ScoreEntry {
    /// Create an entry. The name is stored trimmed.
    #[must_use]
    pub fn new(name: impl AsRef<str>, winnings: Money) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            winnings,
        }
    }
}

/// Recorded scores in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
    names: FxHashSet<String>,
}

impl Leaderboard {
    /// Create an empty leaderboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a leaderboard from stored entries, skipping invalid ones.
    pub fn from_entries(entries: impl IntoIterator<Item = ScoreEntry>) -> Self {
        let mut board = Self::new();
        for entry in entries {
            if let Err(err) = board.record(entry) {
                tracing::warn!(%err, "skipping stored leaderboard entry");
            }
        }
        board
    }

    /// Is `name` already taken?
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&Self::key(name))
    }

    /// Record a finished game.
    pub fn record(&mut self, entry: ScoreEntry) -> Result<(), LeaderboardError> {
        let entry = ScoreEntry::new(&entry.name, entry.winnings);
        if entry.name.is_empty() {
            return Err(LeaderboardError::EmptyName);
        }
        if !self.names.insert(Self::key(&entry.name)) {
            return Err(LeaderboardError::DuplicateName(entry.name));
        }
        tracing::info!(name = %entry.name, winnings = %entry.winnings, "score recorded");
        self.entries.push(entry);
        Ok(())
    }

    /// Entries in recording order.
    #[must_use]
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries highest winnings first. Ties keep recording order.
    #[must_use]
    pub fn ranked(&self) -> Vec<&ScoreEntry> {
        let mut ranked: Vec<&ScoreEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.winnings.cmp(&a.winnings));
        ranked
    }

    /// Split the ranking into `count` display columns of `ceil(n / count)`
    /// entries each. Trailing columns may be short or empty.
    #[must_use]
    pub fn columns(&self, count: usize) -> Vec<Vec<&ScoreEntry>> {
        if count == 0 {
            return Vec::new();
        }
        let ranked = self.ranked();
        let per_column = ranked.len().div_ceil(count).max(1);
        let mut columns: Vec<Vec<&ScoreEntry>> =
            ranked.chunks(per_column).map(<[&ScoreEntry]>::to_vec).collect();
        columns.resize_with(count, Vec::new);
        columns
    }

    fn key(name: &str) -> String {
        name.trim().to_lowercase()
    }
}
