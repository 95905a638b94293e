//! Session facade.
//!
//! A `Session` owns one game instance at a time together with its thinking
//! timer and a queue of events for the host. The host calls the inbound
//! methods as the player clicks, moves time forward with `advance` (or
//! fires the timer from its own scheduler), and drains events to render
//! and play sounds.
//!
//! ```
//! use briefcase_game::core::{ContainerId, GameConfig, Phase};
//! use briefcase_game::session::Session;
//!
//! let mut session = Session::new(GameConfig::default(), 7).unwrap();
//! session.initialize(false).unwrap();
//! assert!(session.select_container(ContainerId::new(5)));
//! assert_eq!(session.state().map(|s| s.phase), Some(Phase::OpenCases));
//! ```

use std::time::Duration;

use tracing::{debug, info};

use crate::core::{
    Action, ConfigError, ContainerId, GameConfig, GameEvent, GameRng, GameState, TimerId, TimerSlot,
};
use crate::leaderboard::ScoreEntry;
use crate::rules::Engine;

/// One player at the table, one game at a time.
#[derive(Clone, Debug)]
pub struct Session {
    engine: Engine,
    root_rng: GameRng,
    rng: GameRng,
    state: Option<GameState>,
    epoch: u64,
    timer: TimerSlot,
    player_name: Option<String>,
    events: Vec<GameEvent>,
}

impl Session {
    /// Create a session. Fails on a defective configuration.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Ok(Self::with_engine(Engine::new(config)?, GameRng::new(seed)))
    }

    /// Create a session around an existing engine and RNG.
    #[must_use]
    pub fn with_engine(engine: Engine, rng: GameRng) -> Self {
        Self {
            engine,
            rng: rng.clone(),
            root_rng: rng,
            state: None,
            epoch: 0,
            timer: TimerSlot::new(),
            player_name: None,
            events: Vec::new(),
        }
    }

    /// Set the name recorded with this player's scores.
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = Some(name.into());
        self
    }

    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.player_name = Some(name.into());
    }

    #[must_use]
    pub fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Current game, if one is in progress or finished.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Number of the current game instance. Starts at 1.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The thinking timer slot.
    #[must_use]
    pub fn timer(&self) -> &TimerSlot {
        &self.timer
    }

    // === Lifecycle ===

    /// Start a new game, discarding any current one.
    ///
    /// Each instance draws from its own stream derived from the session
    /// seed, so a game replays identically for the same seed and epoch.
    pub fn initialize(&mut self, kids_mode: bool) -> Result<&GameState, ConfigError> {
        self.reset();
        self.epoch += 1;
        self.rng = self.root_rng.for_context(&format!("game-{}", self.epoch));
        let state = self.engine.new_game(self.epoch, kids_mode, &mut self.rng)?;
        Ok(self.state.insert(state))
    }

    /// Drop the current game. Cancels the thinking timer in the same step so
    /// a late tick can't reach the next game.
    pub fn reset(&mut self) {
        if let Some(id) = self.timer.cancel() {
            debug!(timer = %id, "cancelled thinking timer");
        }
        self.state = None;
        self.events.clear();
    }

    // === Player actions ===

    pub fn select_container(&mut self, id: ContainerId) -> bool {
        self.dispatch(Action::SelectContainer(id))
    }

    pub fn open_container(&mut self, id: ContainerId) -> bool {
        self.dispatch(Action::OpenContainer(id))
    }

    pub fn answer_call(&mut self) -> bool {
        self.dispatch(Action::AnswerCall)
    }

    pub fn accept_or_reject_deal(&mut self, accepted: bool) -> bool {
        self.dispatch(Action::Deal { accepted })
    }

    pub fn choose_final(&mut self, keep_own: bool) -> bool {
        self.dispatch(Action::FinalChoice { keep_own })
    }

    pub fn reveal_container(&mut self) -> bool {
        self.dispatch(Action::RevealContainer)
    }

    /// Would clicking `id` do anything right now?
    #[must_use]
    pub fn is_clickable(&self, id: ContainerId) -> bool {
        self.state
            .as_ref()
            .is_some_and(|state| self.engine.is_clickable(state, id))
    }

    // === Timer ===

    /// Move the virtual clock forward, firing the thinking timer if due.
    /// Returns true if the timer fired.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        match self.timer.advance(elapsed) {
            Some(id) => self.dispatch(Action::ThinkingElapsed(id)),
            None => false,
        }
    }

    /// Fire timer `id` from an external scheduler. Stale ids are ignored.
    pub fn fire_timer(&mut self, id: TimerId) -> bool {
        if self.timer.armed() == Some(id) {
            self.timer.cancel();
        }
        self.dispatch(Action::ThinkingElapsed(id))
    }

    // === Outbound ===

    /// Take every event produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// The finished game's leaderboard entry, if the game is over and the
    /// player has a name.
    #[must_use]
    pub fn score_entry(&self) -> Option<ScoreEntry> {
        let state = self.state.as_ref()?;
        let result = self.engine.result(state)?;
        let name = self.player_name.as_deref()?;
        Some(ScoreEntry::new(name, result.winnings()))
    }

    fn dispatch(&mut self, action: Action) -> bool {
        let Some(state) = self.state.as_ref() else {
            debug!(?action, "no game in progress");
            return false;
        };

        let step = self.engine.apply(state, action, &mut self.rng);
        if !step.applied {
            return false;
        }

        for event in &step.events {
            match event {
                GameEvent::ThinkingStarted { timer } => self.timer.arm(*timer),
                GameEvent::GameEnded { winnings, took_deal } => {
                    info!(epoch = self.epoch, %winnings, took_deal, "game over");
                }
                _ => {}
            }
        }
        self.events.extend(step.events);
        self.state = Some(step.state);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Phase, ThinkingDelays};

    fn session() -> Session {
        Session::new(GameConfig::default(), 42).unwrap()
    }

    /// Open every clickable container until the phase changes.
    fn finish_round(session: &mut Session) {
        while session.state().map(|s| s.phase) == Some(Phase::OpenCases) {
            let id = session
                .state()
                .and_then(|s| s.remaining().next().map(|c| c.id))
                .unwrap();
            assert!(session.open_container(id));
        }
    }

    #[test]
    fn test_actions_without_game_are_ignored() {
        let mut s = session();
        assert!(!s.select_container(ContainerId::new(1)));
        assert!(!s.answer_call());
        assert!(s.drain_events().is_empty());
        assert!(s.score_entry().is_none());
    }

    #[test]
    fn test_initialize_bumps_epoch() {
        let mut s = session();
        assert_eq!(s.initialize(false).unwrap().epoch, 1);
        assert_eq!(s.initialize(true).unwrap().epoch, 2);
        assert!(s.state().unwrap().kids_mode);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let mut a = session();
        let mut b = session();
        assert_eq!(a.initialize(false).unwrap(), b.initialize(false).unwrap());
    }

    #[test]
    fn test_advance_drives_thinking_timer() {
        let mut s = session();
        s.initialize(false).unwrap();
        s.select_container(ContainerId::new(1));
        finish_round(&mut s);
        assert_eq!(s.state().unwrap().phase, Phase::BankerThinking);

        let remaining = s.timer().remaining().unwrap();
        assert!(remaining >= Duration::from_secs(10) && remaining < Duration::from_secs(20));

        assert!(!s.advance(Duration::from_secs(9)));
        assert!(s.advance(Duration::from_secs(11)));
        assert_eq!(s.state().unwrap().phase, Phase::BankerCalling);
        assert!(!s.advance(Duration::from_secs(60)));
    }

    #[test]
    fn test_reset_cancels_timer() {
        let mut s = session();
        s.initialize(false).unwrap();
        s.select_container(ContainerId::new(1));
        finish_round(&mut s);
        let stale = s.timer().armed().unwrap();

        s.reset();
        assert!(s.state().is_none());
        assert!(s.timer().armed().is_none());

        s.initialize(false).unwrap();
        assert!(!s.fire_timer(stale));
        assert_eq!(s.state().unwrap().phase, Phase::SelectYourCase);
    }

    #[test]
    fn test_score_entry_after_deal() {
        let config = GameConfig::default().with_thinking_delays(ThinkingDelays::instant());
        let mut s = Session::new(config, 3).unwrap().with_player_name("Ana");
        s.initialize(false).unwrap();
        s.select_container(ContainerId::new(2));
        finish_round(&mut s);
        assert!(s.advance(Duration::ZERO));
        assert!(s.answer_call());
        assert!(s.score_entry().is_none());
        assert!(s.accept_or_reject_deal(true));

        let offer = s.state().unwrap().offer.as_ref().unwrap().amount;
        assert_eq!(s.score_entry(), Some(ScoreEntry::new("Ana", offer)));

        let events = s.drain_events();
        assert!(events.last().unwrap().is_game_end());
        assert!(s.drain_events().is_empty());
    }
}
