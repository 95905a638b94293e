//! Presentation helpers for hosts.
//!
//! Nothing here touches a screen or a speaker. These functions turn game
//! state and events into the text, widget flags, prize board and sound
//! cue a host needs to render a frame.
//!
//! - `message`: status line per phase and widget visibility
//! - `board`: two-column prize board
//! - `cues`: sound cue classification

pub mod board;
pub mod cues;
pub mod message;

pub use board::{BoardEntry, PrizeBoard};
pub use cues::{case_open_cue, cue_for, deal_accepted_cue, final_choice_cue, reveal_cue, SoundCue};
pub use message::{status_message, Visibility};
