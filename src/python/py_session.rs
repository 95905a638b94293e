//! Session bindings for Python.

use std::time::Duration;

use pyo3::prelude::*;

use crate::core::{ContainerId, GameConfig};
use crate::leaderboard::{Leaderboard, ScoreEntry};
use crate::presentation::{cue_for, status_message};
use crate::session::Session;

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", err))
}

/// Python wrapper for Session.
///
/// Containers are addressed by their numeric id (1-24).
#[pyclass(name = "BriefcaseSession")]
pub struct PyBriefcaseSession {
    session: Session,
}

#[pymethods]
impl PyBriefcaseSession {
    /// Create a session.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic games
    /// - config_json: optional GameConfig as JSON; missing fields take defaults
    /// - player_name: name used for the leaderboard entry
    #[new]
    #[pyo3(signature = (seed = 42, config_json = None, player_name = None))]
    fn new(seed: u64, config_json: Option<&str>, player_name: Option<String>) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => GameConfig::from_json(json).map_err(value_error)?,
            None => GameConfig::default(),
        };
        let mut session = Session::new(config, seed).map_err(value_error)?;
        if let Some(name) = player_name {
            session.set_player_name(name);
        }
        Ok(Self { session })
    }

    /// Start a new game.
    #[pyo3(signature = (kids_mode = false))]
    fn initialize(&mut self, kids_mode: bool) -> PyResult<()> {
        self.session.initialize(kids_mode).map_err(value_error)?;
        Ok(())
    }

    fn reset(&mut self) {
        self.session.reset();
    }

    fn select_container(&mut self, id: u32) -> bool {
        self.session.select_container(ContainerId::new(id))
    }

    fn open_container(&mut self, id: u32) -> bool {
        self.session.open_container(ContainerId::new(id))
    }

    fn answer_call(&mut self) -> bool {
        self.session.answer_call()
    }

    fn accept_or_reject_deal(&mut self, accepted: bool) -> bool {
        self.session.accept_or_reject_deal(accepted)
    }

    fn choose_final(&mut self, keep_own: bool) -> bool {
        self.session.choose_final(keep_own)
    }

    fn reveal_container(&mut self) -> bool {
        self.session.reveal_container()
    }

    fn is_clickable(&self, id: u32) -> bool {
        self.session.is_clickable(ContainerId::new(id))
    }

    /// Advance the virtual clock by `seconds`. Returns True if the banker's
    /// timer fired.
    fn advance(&mut self, seconds: f64) -> bool {
        self.session.advance(Duration::from_secs_f64(seconds.max(0.0)))
    }

    /// Current phase name, or None before `initialize`.
    #[getter]
    fn phase(&self) -> Option<&'static str> {
        self.session.state().map(|s| s.phase.name())
    }

    /// Status line for the current phase.
    fn message(&self) -> String {
        self.session
            .state()
            .map(|s| status_message(s, self.session.engine().config()))
            .unwrap_or_default()
    }

    /// Current state as JSON.
    fn state_json(&self) -> PyResult<Option<String>> {
        self.session
            .state()
            .map(|s| serde_json::to_string(s).map_err(value_error))
            .transpose()
    }

    /// Drain pending events as (json, sound cue name) pairs.
    fn drain_events(&mut self) -> PyResult<Vec<(String, Option<String>)>> {
        self.session
            .drain_events()
            .iter()
            .map(|event| {
                let json = serde_json::to_string(event).map_err(value_error)?;
                Ok((json, cue_for(event).map(|cue| cue.name())))
            })
            .collect()
    }

    /// (name, winnings in centavos) once the game is over.
    fn score_entry(&self) -> Option<(String, u64)> {
        self.session
            .score_entry()
            .map(|entry| (entry.name, entry.winnings.cents()))
    }

    fn __repr__(&self) -> String {
        format!(
            "BriefcaseSession(epoch={}, phase={})",
            self.session.epoch(),
            self.phase().unwrap_or("NONE")
        )
    }
}

/// Python wrapper for Leaderboard.
#[pyclass(name = "Leaderboard")]
#[derive(Default)]
pub struct PyLeaderboard {
    board: Leaderboard,
}

#[pymethods]
impl PyLeaderboard {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Record a score. Raises ValueError on an empty or duplicate name.
    fn record(&mut self, name: &str, winnings_cents: u64) -> PyResult<()> {
        self.board
            .record(ScoreEntry::new(name, crate::core::Money::from_cents(winnings_cents)))
            .map_err(value_error)
    }

    /// (name, winnings in centavos), highest first.
    fn ranked(&self) -> Vec<(String, u64)> {
        self.board
            .ranked()
            .into_iter()
            .map(|e| (e.name.clone(), e.winnings.cents()))
            .collect()
    }

    fn __len__(&self) -> usize {
        self.board.len()
    }
}
