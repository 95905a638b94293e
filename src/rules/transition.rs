//! Round transition policy.
//!
//! Decides where the game goes after a container is opened and after the
//! player refuses a deal. Pure functions of the state and configuration.

use crate::core::{GameConfig, GameState};

/// What follows an open during `OpenCases`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterOpen {
    /// Quota not met yet.
    KeepOpening { left: usize },
    /// Quota met on the last round with one container left: skip the banker.
    FinalChoice,
    /// Quota met: the banker starts thinking.
    BankerThinking,
}

/// What follows a refused deal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterRejection {
    /// One container left besides the player's.
    FinalChoice,
    /// Start round `round`.
    NextRound { round: usize, quota: usize },
    /// The schedule ran out with more than one container left. End the game
    /// on the player's own container.
    Exhausted,
}

/// Containers still to open this round, or `None` past the schedule.
#[must_use]
pub fn quota_left(state: &GameState, config: &GameConfig) -> Option<usize> {
    config
        .quota(state.round)
        .map(|quota| quota.saturating_sub(state.opened_this_round))
}

/// Decide what follows an open. `state` already reflects the open.
#[must_use]
pub fn after_open(state: &GameState, config: &GameConfig) -> AfterOpen {
    match quota_left(state, config) {
        Some(left) if left > 0 => AfterOpen::KeepOpening { left },
        _ => {
            if state.remaining_count() == 1 && state.round == config.last_round() {
                AfterOpen::FinalChoice
            } else {
                AfterOpen::BankerThinking
            }
        }
    }
}

/// Decide what follows a refused deal.
#[must_use]
pub fn after_rejection(state: &GameState, config: &GameConfig) -> AfterRejection {
    if state.remaining_count() == 1 {
        return AfterRejection::FinalChoice;
    }
    let round = state.round + 1;
    match config.quota(round) {
        Some(quota) => AfterRejection::NextRound { round, quota },
        None => AfterRejection::Exhausted,
    }
}
