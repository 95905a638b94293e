//! The game state machine.
//!
//! `Engine::apply` is a reducer: it takes a state and an action and returns
//! the next state plus the events the action produced. Every random draw
//! comes from the caller's `RandomSource`.
//!
//! ## Implementation Notes
//!
//! - Actions that are invalid in the current phase, or that target a
//!   missing, decorative, or already-opened container, are no-ops: the
//!   returned state equals the input and no events are emitted.
//! - Every applied action is appended to the state's history.
//! - Phase changes always follow `Phase::can_transition_to`.

use smallvec::SmallVec;
use tracing::{debug, info, warn};

use super::transition::{self, AfterOpen, AfterRejection};
use crate::banker;
use crate::core::{
    initialize_containers, Action, ActionRecord, ConfigError, ContainerId, GameConfig, GameEvent,
    GameState, Money, Phase, RandomSource, ThinkingTimer, TimerId,
};

/// Events produced by one action. Most actions produce one or two.
pub type Events = SmallVec<[GameEvent; 2]>;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// The player took the banker's offer.
    Deal(Money),
    /// The player played to the end and won a container's amount.
    Played(Money),
}

impl GameResult {
    /// Amount won.
    #[must_use]
    pub fn winnings(&self) -> Money {
        match self {
            GameResult::Deal(m) | GameResult::Played(m) => *m,
        }
    }
}

/// Output of `Engine::apply`.
#[derive(Clone, Debug)]
pub struct Step {
    /// State after the action.
    pub state: GameState,
    /// What the action did.
    pub events: Events,
    /// False if the action was ignored.
    pub applied: bool,
}

impl Step {
    fn ignored(state: &GameState) -> Self {
        Self {
            state: state.clone(),
            events: Events::new(),
            applied: false,
        }
    }
}

/// Runs games under a validated configuration.
#[derive(Clone, Debug)]
pub struct Engine {
    config: GameConfig,
}

impl Engine {
    /// Create an engine. Fails on a defective configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Deal a new game. The only place the prize shuffle draws randomness.
    pub fn new_game<R: RandomSource>(
        &self,
        epoch: u64,
        kids_mode: bool,
        rng: &mut R,
    ) -> Result<GameState, ConfigError> {
        let containers = initialize_containers(&self.config, self.config.table(kids_mode), rng)?;
        info!(epoch, kids_mode, containers = containers.len(), "new game dealt");
        Ok(GameState::new(epoch, kids_mode, containers))
    }

    /// Apply `action` to `state`.
    pub fn apply<R: RandomSource>(&self, state: &GameState, action: Action, rng: &mut R) -> Step {
        let mut next = state.clone();
        let mut events = Events::new();

        let applied = match action {
            Action::SelectContainer(id) => self.select(&mut next, id, &mut events),
            Action::OpenContainer(id) => self.open(&mut next, id, rng, &mut events),
            Action::ThinkingElapsed(timer) => self.thinking_elapsed(&mut next, timer, &mut events),
            Action::AnswerCall => self.answer_call(&mut next, rng, &mut events),
            Action::Deal { accepted: true } => self.accept_deal(&mut next, &mut events),
            Action::Deal { accepted: false } => self.reject_deal(&mut next, &mut events),
            Action::FinalChoice { keep_own } => self.final_choice(&mut next, keep_own, &mut events),
            Action::RevealContainer => self.reveal(&mut next, &mut events),
        };

        if !applied {
            debug!(?action, phase = %state.phase, "action ignored");
            return Step::ignored(state);
        }

        debug_assert!(
            state.phase == next.phase || state.phase.can_transition_to(next.phase),
            "illegal transition {} -> {}",
            state.phase,
            next.phase
        );
        if state.phase != next.phase {
            debug!(from = %state.phase, to = %next.phase, round = next.round, "phase change");
        }

        next.record(ActionRecord::new(action, state.round, state.next_sequence()));
        Step {
            state: next,
            events,
            applied: true,
        }
    }

    /// Is the game over, and how did it end?
    #[must_use]
    pub fn result(&self, state: &GameState) -> Option<GameResult> {
        if !state.is_over() {
            return None;
        }
        let winnings = state.final_winnings.unwrap_or(Money::ZERO);
        Some(if state.took_deal {
            GameResult::Deal(winnings)
        } else {
            GameResult::Played(winnings)
        })
    }

    /// Would clicking container `id` do something right now?
    ///
    /// In `FinalChoice`, clicking the last remaining container means swapping.
    #[must_use]
    pub fn is_clickable(&self, state: &GameState, id: ContainerId) -> bool {
        let Some(container) = state.container(id) else {
            return false;
        };
        if !container.is_prize() {
            return false;
        }
        match state.phase {
            Phase::SelectYourCase => true,
            Phase::OpenCases => {
                container.is_openable()
                    && transition::quota_left(state, &self.config).is_some_and(|left| left > 0)
            }
            Phase::FinalChoice => container.is_remaining(),
            _ => false,
        }
    }

    /// Every action that would be applied in `state`.
    #[must_use]
    pub fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        match state.phase {
            Phase::SelectYourCase => state
                .containers
                .iter()
                .filter(|c| c.is_prize())
                .map(|c| Action::SelectContainer(c.id))
                .collect(),
            Phase::OpenCases => state
                .containers
                .iter()
                .filter(|c| self.is_clickable(state, c.id))
                .map(|c| Action::OpenContainer(c.id))
                .collect(),
            Phase::BankerThinking => state
                .timer
                .map(|t| vec![Action::ThinkingElapsed(t.id)])
                .unwrap_or_default(),
            Phase::BankerCalling => vec![Action::AnswerCall],
            Phase::BankerOffer => vec![
                Action::Deal { accepted: true },
                Action::Deal { accepted: false },
            ],
            Phase::FinalChoice => vec![
                Action::FinalChoice { keep_own: true },
                Action::FinalChoice { keep_own: false },
            ],
            Phase::GameOver if state.took_deal && !state.briefcase_revealed => {
                vec![Action::RevealContainer]
            }
            Phase::GameOver => Vec::new(),
        }
    }

    // === Transitions ===

    fn select(&self, state: &mut GameState, id: ContainerId, events: &mut Events) -> bool {
        if state.phase != Phase::SelectYourCase {
            return false;
        }
        let Some(index) = state.index_of(id) else {
            return false;
        };
        if !state.containers[index].is_prize() {
            return false;
        }

        state.claim_at(index);
        state.phase = Phase::OpenCases;
        events.push(GameEvent::ContainerClaimed { id });
        events.push(GameEvent::RoundStarted {
            round: state.round,
            quota: self.config.quota(state.round).unwrap_or(0),
        });
        info!(%id, "player claimed container");
        true
    }

    fn open<R: RandomSource>(
        &self,
        state: &mut GameState,
        id: ContainerId,
        rng: &mut R,
        events: &mut Events,
    ) -> bool {
        if state.phase != Phase::OpenCases || !self.is_clickable(state, id) {
            return false;
        }
        let Some(index) = state.index_of(id) else {
            return false;
        };

        let pool = state.remaining_amounts().to_vec();
        let Some(amount) = state.open_at(index) else {
            return false;
        };
        state.opened_amounts.push_back(amount);
        state.opened_this_round += 1;
        events.push(GameEvent::ContainerOpened { id, amount, pool });

        match transition::after_open(state, &self.config) {
            AfterOpen::KeepOpening { .. } => {}
            AfterOpen::FinalChoice => {
                state.phase = Phase::FinalChoice;
                events.push(GameEvent::FinalChoiceStarted);
            }
            AfterOpen::BankerThinking => self.start_thinking(state, rng, events),
        }
        true
    }

    fn start_thinking<R: RandomSource>(&self, state: &mut GameState, rng: &mut R, events: &mut Events) {
        let delay = self.config.thinking_delays.for_round(state.round).sample(rng);
        let timer = ThinkingTimer {
            id: state.next_timer_id(),
            delay,
        };
        // Replaces any earlier timer: only one may be outstanding.
        state.timer = Some(timer);
        state.phase = Phase::BankerThinking;
        events.push(GameEvent::ThinkingStarted { timer });
        debug!(timer = %timer.id, ?delay, "banker thinking");
    }

    fn thinking_elapsed(&self, state: &mut GameState, timer: TimerId, events: &mut Events) -> bool {
        if state.phase != Phase::BankerThinking || state.timer.map(|t| t.id) != Some(timer) {
            return false;
        }
        state.timer = None;
        state.phase = Phase::BankerCalling;
        events.push(GameEvent::BankerCalling);
        true
    }

    fn answer_call<R: RandomSource>(&self, state: &mut GameState, rng: &mut R, events: &mut Events) -> bool {
        if state.phase != Phase::BankerCalling {
            return false;
        }
        let offer = banker::make_offer(&state.containers, self.config.remark_strategy, rng);
        info!(offer = %offer.amount, category = ?offer.remark.category, round = state.round, "banker offer");

        state.offer = Some(offer.clone());
        state.phase = Phase::BankerOffer;
        events.push(GameEvent::OfferMade { offer });
        true
    }

    fn accept_deal(&self, state: &mut GameState, events: &mut Events) -> bool {
        if state.phase != Phase::BankerOffer {
            return false;
        }
        let Some(offer) = state.offer.as_ref().map(|o| o.amount) else {
            warn!("offer phase without an offer");
            return false;
        };

        state.took_deal = true;
        state.final_winnings = Some(offer);
        state.phase = Phase::GameOver;
        events.push(GameEvent::DealAccepted {
            offer,
            own_amount: state.player_amount().unwrap_or(Money::ZERO),
        });
        events.push(GameEvent::GameEnded {
            winnings: offer,
            took_deal: true,
        });
        info!(winnings = %offer, "deal accepted");
        true
    }

    fn reject_deal(&self, state: &mut GameState, events: &mut Events) -> bool {
        if state.phase != Phase::BankerOffer {
            return false;
        }

        let opened: Vec<ContainerId> = state.opened_non_player().map(|c| c.id).collect();
        let removed = state.mark_for_removal(&opened);
        events.push(GameEvent::DealRejected { removed });

        match transition::after_rejection(state, &self.config) {
            AfterRejection::FinalChoice => {
                state.phase = Phase::FinalChoice;
                events.push(GameEvent::FinalChoiceStarted);
            }
            AfterRejection::NextRound { round, quota } => {
                state.round = round;
                state.opened_this_round = 0;
                state.phase = Phase::OpenCases;
                events.push(GameEvent::RoundStarted { round, quota });
            }
            AfterRejection::Exhausted => {
                let winnings = state.player_amount().unwrap_or(Money::ZERO);
                warn!(
                    round = state.round,
                    remaining = state.remaining_count(),
                    "round schedule exhausted, ending on player's container"
                );
                state.final_winnings = Some(winnings);
                state.phase = Phase::GameOver;
                events.push(GameEvent::GameEnded {
                    winnings,
                    took_deal: false,
                });
            }
        }
        true
    }

    fn final_choice(&self, state: &mut GameState, keep_own: bool, events: &mut Events) -> bool {
        if state.phase != Phase::FinalChoice {
            return false;
        }
        let own = state.player_amount();
        let (last, extra) = {
            let mut remaining = state.remaining();
            let last = remaining.next().and_then(|c| c.amount);
            (last, remaining.next().is_some())
        };

        let (Some(own), Some(last), false) = (own, last, extra) else {
            warn!("final choice without exactly one player and one remaining container");
            return false;
        };

        let (chosen, other) = if keep_own { (own, last) } else { (last, own) };
        state.final_winnings = Some(chosen);
        state.phase = Phase::GameOver;
        events.push(GameEvent::FinalChoiceMade {
            kept_own: keep_own,
            chosen,
            other,
        });
        events.push(GameEvent::GameEnded {
            winnings: chosen,
            took_deal: false,
        });
        info!(winnings = %chosen, kept_own = keep_own, "final choice");
        true
    }

    fn reveal(&self, state: &mut GameState, events: &mut Events) -> bool {
        if state.phase != Phase::GameOver || !state.took_deal || state.briefcase_revealed {
            return false;
        }
        state.briefcase_revealed = true;
        events.push(GameEvent::BriefcaseRevealed {
            amount: state.player_amount().unwrap_or(Money::ZERO),
            offer: state.offer.as_ref().map_or(Money::ZERO, |o| o.amount),
        });
        true
    }
}
