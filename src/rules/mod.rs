//! Game rules.
//!
//! - `transition`: where the game goes after an open or a refused deal
//! - `engine`: the reducer that applies actions to states
//!
//! Hosts never mutate `GameState` directly; everything goes through
//! `Engine::apply`.

pub mod engine;
pub mod transition;

pub use engine::{Engine, Events, GameResult, Step};
pub use transition::{after_open, after_rejection, quota_left, AfterOpen, AfterRejection};
