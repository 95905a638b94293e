//! Outbound game events.
//!
//! Each applied action yields zero or more events describing what changed.
//! Collaborators use them to pick sound cues, drive the host timer, and
//! record scores without diffing state snapshots.

use serde::{Deserialize, Serialize};

use super::container::ContainerId;
use super::money::Money;
use super::timer::ThinkingTimer;
use crate::banker::BankerOffer;

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The player claimed a container.
    ContainerClaimed { id: ContainerId },

    /// A container was opened.
    ///
    /// `pool` holds the amounts still in play on the board just before the
    /// open (the opened amount included, the player's own excluded).
    ContainerOpened {
        id: ContainerId,
        amount: Money,
        pool: Vec<Money>,
    },

    /// The round quota was met and the banker started thinking. The host
    /// must fire `timer` after its delay.
    ThinkingStarted { timer: ThinkingTimer },

    /// The thinking timer fired; the phone is ringing.
    BankerCalling,

    /// The banker's offer is on the table.
    OfferMade { offer: BankerOffer },

    /// The player took the deal.
    DealAccepted { offer: Money, own_amount: Money },

    /// The player refused the deal. `removed` are the opened containers
    /// marked for visual removal.
    DealRejected { removed: Vec<ContainerId> },

    /// A new round of opening began.
    RoundStarted { round: usize, quota: usize },

    /// One container left besides the player's.
    FinalChoiceStarted,

    /// The player kept or swapped.
    FinalChoiceMade {
        kept_own: bool,
        chosen: Money,
        other: Money,
    },

    /// The player's container was opened after a deal.
    BriefcaseRevealed { amount: Money, offer: Money },

    /// Winnings are final.
    GameEnded { winnings: Money, took_deal: bool },
}

impl GameEvent {
    /// Does this event end the game?
    #[must_use]
    pub fn is_game_end(&self) -> bool {
        matches!(self, GameEvent::GameEnded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_game_end() {
        assert!(GameEvent::GameEnded {
            winnings: Money::from_units(5),
            took_deal: false
        }
        .is_game_end());
        assert!(!GameEvent::BankerCalling.is_game_end());
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::ContainerOpened {
            id: ContainerId::new(4),
            amount: Money::from_units(250),
            pool: vec![Money::from_cents(5), Money::from_units(250)],
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
