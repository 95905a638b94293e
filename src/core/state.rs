//! Game state.
//!
//! `GameState` is a value: the reducer takes one and returns the next.
//! Containers, reveal order, removals and history live in `im` persistent
//! collections so each step's clone shares structure with the last.
//!
//! ## Lifecycle
//!
//! Created by `Engine::new_game` (the only point the prize shuffle consumes
//! randomness), advanced only through `Engine::apply`, and dropped when the
//! session resets.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::action::ActionRecord;
use super::container::{Container, ContainerId};
use super::money::Money;
use super::phase::Phase;
use super::timer::{ThinkingTimer, TimerId};
use crate::banker::BankerOffer;

/// Failure to encode or decode a state snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Encode(#[source] bincode::Error),
    #[error("snapshot decoding failed: {0}")]
    Decode(#[source] bincode::Error),
}

/// The authoritative state of one game instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Game instance number. Timer ids carry it.
    pub epoch: u64,

    /// Which prize table was dealt.
    pub kids_mode: bool,

    /// Current phase.
    pub phase: Phase,

    /// All containers, ordered by id.
    pub containers: Vector<Container>,

    /// Current round index (0-based).
    pub round: usize,

    /// Containers opened so far in the current round.
    pub opened_this_round: usize,

    /// Opened amounts in reveal order. Greys out the prize board.
    pub opened_amounts: Vector<Money>,

    /// Opened containers to remove from the grid, in the order marked.
    pub pending_removal: Vector<ContainerId>,

    /// The banker's latest offer.
    pub offer: Option<BankerOffer>,

    /// Did the player accept an offer?
    pub took_deal: bool,

    /// Has the player's container been opened after a deal?
    pub briefcase_revealed: bool,

    /// Winnings, once decided.
    pub final_winnings: Option<Money>,

    /// The outstanding thinking timer, if the banker is thinking.
    pub timer: Option<ThinkingTimer>,

    /// Applied actions, oldest first.
    pub history: Vector<ActionRecord>,

    next_timer_seq: u32,
}

impl GameState {
    /// Create a state in `SelectYourCase` over the given containers.
    #[must_use]
    pub fn new(epoch: u64, kids_mode: bool, containers: Vector<Container>) -> Self {
        Self {
            epoch,
            kids_mode,
            phase: Phase::SelectYourCase,
            containers,
            round: 0,
            opened_this_round: 0,
            opened_amounts: Vector::new(),
            pending_removal: Vector::new(),
            offer: None,
            took_deal: false,
            briefcase_revealed: false,
            final_winnings: None,
            timer: None,
            history: Vector::new(),
            next_timer_seq: 0,
        }
    }

    // === Containers ===

    /// Index of container `id` in `containers`.
    #[must_use]
    pub fn index_of(&self, id: ContainerId) -> Option<usize> {
        // Ids are dense from 1; fall back to a scan if a snapshot breaks that.
        let guess = (id.raw() as usize).checked_sub(1)?;
        match self.containers.get(guess) {
            Some(c) if c.id == id => Some(guess),
            _ => self.containers.iter().position(|c| c.id == id),
        }
    }

    /// Look up a container.
    #[must_use]
    pub fn container(&self, id: ContainerId) -> Option<&Container> {
        self.index_of(id).and_then(|i| self.containers.get(i))
    }

    /// The player's container, once claimed.
    #[must_use]
    pub fn player_container(&self) -> Option<&Container> {
        self.containers.iter().find(|c| c.is_player)
    }

    /// Amount in the player's container.
    #[must_use]
    pub fn player_amount(&self) -> Option<Money> {
        self.player_container().and_then(|c| c.amount)
    }

    /// Non-player prize containers not yet opened.
    pub fn remaining(&self) -> impl Iterator<Item = &Container> {
        self.containers.iter().filter(|c| c.is_remaining())
    }

    /// Count of `remaining()`.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining().count()
    }

    /// Amounts of `remaining()`, in container order.
    #[must_use]
    pub fn remaining_amounts(&self) -> SmallVec<[Money; 24]> {
        self.remaining().filter_map(|c| c.amount).collect()
    }

    /// Opened containers other than the player's.
    pub fn opened_non_player(&self) -> impl Iterator<Item = &Container> {
        self.containers.iter().filter(|c| c.is_opened && !c.is_player)
    }

    /// Mark container at `index` opened. Returns its amount.
    pub(crate) fn open_at(&mut self, index: usize) -> Option<Money> {
        let container = self.containers.get_mut(index)?;
        container.is_opened = true;
        container.amount
    }

    /// Claim container at `index` for the player.
    pub(crate) fn claim_at(&mut self, index: usize) {
        if let Some(container) = self.containers.get_mut(index) {
            container.is_player = true;
            container.is_opened = true;
        }
    }

    /// Add `ids` to the removal list, skipping ones already listed.
    pub(crate) fn mark_for_removal(&mut self, ids: &[ContainerId]) -> Vec<ContainerId> {
        let mut added = Vec::new();
        for &id in ids {
            if !self.pending_removal.contains(&id) {
                self.pending_removal.push_back(id);
                added.push(id);
            }
        }
        added
    }

    // === Timer ===

    /// Allocate the next timer id for this instance.
    pub(crate) fn next_timer_id(&mut self) -> TimerId {
        let id = TimerId {
            epoch: self.epoch,
            seq: self.next_timer_seq,
        };
        self.next_timer_seq += 1;
        id
    }

    // === Progress ===

    /// Has the game ended?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Record an applied action.
    pub(crate) fn record(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    /// Next history sequence number.
    #[must_use]
    pub fn next_sequence(&self) -> u32 {
        self.history.len() as u32
    }

    // === Snapshots ===

    /// Encode a compact binary snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode a snapshot produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes).map_err(SnapshotError::Decode)
    }
}
