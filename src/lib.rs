//! # briefcase-game
//!
//! Engine for a briefcase elimination game show. The player claims one of
//! 22 prize containers, opens the others round by round, and fields a
//! simulated banker's offers until they take a deal or reach the final
//! keep-or-swap.
//!
//! ## Design Principles
//!
//! 1. **Reducer**: `Engine::apply(state, action, rng)` returns the next state
//!    and the events it produced. Invalid actions are no-ops, never errors.
//!
//! 2. **Injected Randomness**: The prize shuffle, offer jitter, remark pick
//!    and banker delay all draw from a caller-supplied `RandomSource`, so
//!    every game replays from a seed.
//!
//! 3. **Configuration Over Convention**: Prize tables, round quotas, delay
//!    bounds and remark strategy live in `GameConfig`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: `GameState` is cloned per step; `im-rs`
//!   keeps that cheap.
//!
//! - **One Timer**: At most one banker timer is outstanding per game. Ids
//!   carry the game's epoch, so a timer from a discarded game never fires
//!   into the next one.
//!
//! ## Modules
//!
//! - `core`: Money, containers, phases, state, actions, events, timers, RNG,
//!   configuration
//! - `banker`: Offer calculation and remarks
//! - `rules`: Round transitions and the `Engine` reducer
//! - `session`: Host-facing facade with timer driving and an event queue
//! - `leaderboard`: Ranked scores
//! - `presentation`: Status text, prize board, sound cues

pub mod core;
pub mod banker;
pub mod rules;
pub mod session;
pub mod leaderboard;
pub mod presentation;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Money, Container, ContainerId, Phase,
    GameRng, GameRngState, RandomSource, ScriptedRandom,
    ConfigError, DelayBounds, GameConfig, ThinkingDelays,
    ThinkingTimer, TimerId, TimerSlot,
    Action, ActionRecord, GameEvent,
    GameState, SnapshotError,
};

pub use crate::banker::{
    BankerOffer, Remark, RemarkCategory, RemarkStrategy,
    calculate_offer, select_remark,
};

pub use crate::rules::{Engine, GameResult, Step};

pub use crate::session::Session;

pub use crate::leaderboard::{Leaderboard, LeaderboardError, ScoreEntry};

pub use crate::presentation::{PrizeBoard, SoundCue, Visibility};
