//! Core engine types: money, containers, phases, state, actions, events,
//! timers, RNG, configuration, and the prize pool initializer.

pub mod money;
pub mod container;
pub mod phase;
pub mod rng;
pub mod config;
pub mod pool;
pub mod timer;
pub mod action;
pub mod event;
pub mod state;

pub use money::Money;
pub use container::{Container, ContainerId};
pub use phase::Phase;
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRandom};
pub use config::{ConfigError, DelayBounds, GameConfig, ThinkingDelays};
pub use pool::initialize_containers;
pub use timer::{ThinkingTimer, TimerId, TimerSlot};
pub use action::{Action, ActionRecord};
pub use event::GameEvent;
pub use state::{GameState, SnapshotError};
