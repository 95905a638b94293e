//! Game phases and the legal transition table.

use serde::{Deserialize, Serialize};

/// Where the game is. Closed set; `GameOver` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player to claim a container.
    #[default]
    SelectYourCase,
    /// Opening containers toward the round quota.
    OpenCases,
    /// Round complete, banker's thinking timer is running.
    BankerThinking,
    /// Timer fired, waiting for the player to answer.
    BankerCalling,
    /// An offer is on the table.
    BankerOffer,
    /// One container left besides the player's: keep or swap.
    FinalChoice,
    /// Winnings decided.
    GameOver,
}

impl Phase {
    /// All phases in progression order.
    pub const ALL: [Phase; 7] = [
        Phase::SelectYourCase,
        Phase::OpenCases,
        Phase::BankerThinking,
        Phase::BankerCalling,
        Phase::BankerOffer,
        Phase::FinalChoice,
        Phase::GameOver,
    ];

    /// Is `self -> next` an edge of the state machine?
    #[must_use]
    pub const fn can_transition_to(self, next: Phase) -> bool {
        use Phase::*;
        matches!(
            (self, next),
            (SelectYourCase, OpenCases)
                | (OpenCases, BankerThinking)
                | (OpenCases, FinalChoice)
                | (BankerThinking, BankerCalling)
                | (BankerCalling, BankerOffer)
                | (BankerOffer, OpenCases)
                | (BankerOffer, FinalChoice)
                | (BankerOffer, GameOver)
                | (FinalChoice, GameOver)
        )
    }

    /// No transitions leave this phase.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver)
    }

    /// Stable name, matching the phase labels collaborators render.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::SelectYourCase => "SELECT_YOUR_CASE",
            Phase::OpenCases => "OPEN_CASES",
            Phase::BankerThinking => "BANKER_THINKING",
            Phase::BankerCalling => "BANKER_CALLING",
            Phase::BankerOffer => "BANKER_OFFER",
            Phase::FinalChoice => "FINAL_CHOICE",
            Phase::GameOver => "GAME_OVER",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_over_is_terminal() {
        for next in Phase::ALL {
            assert!(!Phase::GameOver.can_transition_to(next));
        }
        assert!(Phase::GameOver.is_terminal());
        assert!(!Phase::FinalChoice.is_terminal());
    }

    #[test]
    fn test_no_self_loops() {
        for phase in Phase::ALL {
            assert!(!phase.can_transition_to(phase), "{} loops", phase);
        }
    }

    #[test]
    fn test_banker_sequence() {
        assert!(Phase::OpenCases.can_transition_to(Phase::BankerThinking));
        assert!(Phase::BankerThinking.can_transition_to(Phase::BankerCalling));
        assert!(Phase::BankerCalling.can_transition_to(Phase::BankerOffer));
        assert!(!Phase::BankerThinking.can_transition_to(Phase::BankerOffer));
        assert!(!Phase::SelectYourCase.can_transition_to(Phase::BankerThinking));
    }

    #[test]
    fn test_every_phase_but_game_over_has_an_exit() {
        for phase in Phase::ALL.iter().filter(|p| !p.is_terminal()) {
            assert!(Phase::ALL.iter().any(|&next| phase.can_transition_to(next)));
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Phase::default(), Phase::SelectYourCase);
        assert_eq!(Phase::BankerOffer.to_string(), "BANKER_OFFER");
    }
}
