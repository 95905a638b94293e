//! The prize board: every amount in play, greyed out once opened.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameState, Money};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardEntry {
    pub amount: Money,
    /// The amount has been revealed.
    pub disabled: bool,
}

/// The prize table in two columns, smallest amounts on the left.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeBoard {
    pub left: Vec<BoardEntry>,
    pub right: Vec<BoardEntry>,
}

impl PrizeBoard {
    /// Board for the table `state` was dealt from.
    #[must_use]
    pub fn for_state(state: &GameState, config: &GameConfig) -> Self {
        let mut amounts = config.table(state.kids_mode).to_vec();
        amounts.sort_unstable();

        let entries: Vec<BoardEntry> = amounts
            .into_iter()
            .map(|amount| BoardEntry {
                amount,
                disabled: state.opened_amounts.contains(&amount),
            })
            .collect();

        let split = entries.len().div_ceil(2);
        let right = entries[split..].to_vec();
        let mut left = entries;
        left.truncate(split);
        Self { left, right }
    }

    /// Entries still lit.
    pub fn active(&self) -> impl Iterator<Item = &BoardEntry> {
        self.left.iter().chain(&self.right).filter(|e| !e.disabled)
    }
}
