//! Status line and widget visibility per phase.

use crate::core::{GameConfig, GameState, Money, Phase};
use crate::rules::quota_left;

/// The status line for `state`.
#[must_use]
pub fn status_message(state: &GameState, config: &GameConfig) -> String {
    match state.phase {
        Phase::SelectYourCase => "Which briefcase will you choose?".to_string(),
        Phase::OpenCases => {
            let left = quota_left(state, config).unwrap_or(0);
            let plural = if left == 1 { "" } else { "s" };
            format!("Open {} more case{}", left, plural)
        }
        Phase::BankerThinking => "Banker is Thinking".to_string(),
        Phase::BankerCalling => "The Banker is calling...".to_string(),
        Phase::BankerOffer => state
            .offer
            .as_ref()
            .map(|o| o.remark.line.clone())
            .unwrap_or_default(),
        Phase::FinalChoice => "Choose your briefcase or swap for the remaining case?".to_string(),
        Phase::GameOver => {
            let winnings = if state.took_deal {
                state.offer.as_ref().map(|o| o.amount)
            } else {
                state.final_winnings
            };
            format!("You Win {}", winnings.unwrap_or(Money::ZERO))
        }
    }
}

/// Which widgets the host should show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Visibility {
    pub message: bool,
    pub answer_button: bool,
    pub deal_buttons: bool,
    pub offer: bool,
    pub leaderboard: bool,
    /// "Open your briefcase" prompt after a deal.
    pub reveal_prompt: bool,
}

impl Visibility {
    #[must_use]
    pub fn for_state(state: &GameState) -> Self {
        let phase = state.phase;
        Self {
            message: matches!(
                phase,
                Phase::SelectYourCase | Phase::OpenCases | Phase::BankerThinking | Phase::FinalChoice
            ),
            answer_button: phase == Phase::BankerCalling,
            deal_buttons: phase == Phase::BankerOffer,
            offer: phase == Phase::BankerOffer,
            leaderboard: phase == Phase::GameOver,
            reveal_prompt: phase == Phase::GameOver && state.took_deal && !state.briefcase_revealed,
        }
    }
}
