//! The banker's thinking timer.
//!
//! At most one timer is outstanding per game instance. Arming a new one
//! replaces the old; cancelling clears it. Ids carry the game instance's
//! epoch, so a timer armed for a discarded instance can never match the
//! timer of its replacement.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identifies one armed timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId {
    /// Game instance the timer belongs to.
    pub epoch: u64,
    /// Sequence within the instance.
    pub seq: u32,
}

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({}.{})", self.epoch, self.seq)
    }
}

/// A timer the engine asked the host to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkingTimer {
    pub id: TimerId,
    pub delay: Duration,
}

/// Drives a single `ThinkingTimer` against a monotonic clock.
///
/// Hosts without their own scheduler advance the slot with elapsed time and
/// fire whatever comes due.
#[derive(Clone, Debug, Default)]
pub struct TimerSlot {
    now: Duration,
    armed: Option<(TimerId, Duration)>,
}

impl TimerSlot {
    /// Create an empty slot at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Arm `timer`, replacing any armed timer.
    pub fn arm(&mut self, timer: ThinkingTimer) {
        self.armed = Some((timer.id, self.now + timer.delay));
    }

    /// Cancel the armed timer, returning its id.
    pub fn cancel(&mut self) -> Option<TimerId> {
        self.armed.take().map(|(id, _)| id)
    }

    /// Id of the armed timer.
    #[must_use]
    pub fn armed(&self) -> Option<TimerId> {
        self.armed.map(|(id, _)| id)
    }

    /// Time left before the armed timer is due.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.armed.map(|(_, deadline)| deadline.saturating_sub(self.now))
    }

    /// Advance the clock. Returns the timer id if it came due; the slot is
    /// then empty.
    pub fn advance(&mut self, elapsed: Duration) -> Option<TimerId> {
        self.now += elapsed;
        match self.armed {
            Some((id, deadline)) if deadline <= self.now => {
                self.armed = None;
                Some(id)
            }
            _ => None,
        }
    }
}
