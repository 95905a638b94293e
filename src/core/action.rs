//! Inbound actions and the recorded action history.
//!
//! Actions are what the player (or the host's timer) does to a game in
//! progress. Starting and discarding a game are not actions: they create or
//! drop the `GameState` itself (see `Session`).

use serde::{Deserialize, Serialize};

use super::container::ContainerId;
use super::timer::TimerId;

/// Something that happens to a game in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Claim a container as the player's own.
    SelectContainer(ContainerId),
    /// Open a container during a round.
    OpenContainer(ContainerId),
    /// The banker's thinking timer fired.
    ThinkingElapsed(TimerId),
    /// Pick up the banker's call.
    AnswerCall,
    /// Respond to the offer on the table.
    Deal { accepted: bool },
    /// Keep the player's container or swap for the last one.
    FinalChoice { keep_own: bool },
    /// Open the player's container after taking a deal.
    RevealContainer,
}

impl Action {
    /// The container this action targets, if any.
    #[must_use]
    pub fn target(&self) -> Option<ContainerId> {
        match self {
            Action::SelectContainer(id) | Action::OpenContainer(id) => Some(*id),
            _ => None,
        }
    }
}

/// An action that changed the game, with its position in the history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action applied.
    pub action: Action,

    /// Round when the action was applied.
    pub round: usize,

    /// Position in the game's history (0-based).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, round: usize, sequence: u32) -> Self {
        Self {
            action,
            round,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target() {
        assert_eq!(
            Action::OpenContainer(ContainerId::new(3)).target(),
            Some(ContainerId::new(3))
        );
        assert_eq!(Action::AnswerCall.target(), None);
        assert_eq!(Action::Deal { accepted: true }.target(), None);
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::ThinkingElapsed(TimerId { epoch: 3, seq: 1 });
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(Action::FinalChoice { keep_own: false }, 4, 27);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
