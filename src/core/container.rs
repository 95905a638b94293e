//! Containers (briefcases) and their identifiers.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Container identifier, `1..=container_count`, stable for a game's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContainerId(pub u32);

impl ContainerId {
    /// Create a new container ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ContainerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Case({})", self.0)
    }
}

/// One briefcase.
///
/// `amount` is `None` for decorative containers. `is_opened` only ever goes
/// from false to true; `is_player` is set once when the player claims it.
/// The player's own container is marked opened on selection (it leaves the
/// pool of clickable cases) even though its amount stays hidden.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: ContainerId,
    pub amount: Option<Money>,
    pub is_player: bool,
    pub is_opened: bool,
}

impl Container {
    /// A fresh, unopened prize container.
    #[must_use]
    pub fn with_amount(id: ContainerId, amount: Money) -> Self {
        Self {
            id,
            amount: Some(amount),
            is_player: false,
            is_opened: false,
        }
    }

    /// A fresh decorative container with no prize.
    #[must_use]
    pub fn decorative(id: ContainerId) -> Self {
        Self {
            id,
            amount: None,
            is_player: false,
            is_opened: false,
        }
    }

    /// Does this container hold a prize?
    #[must_use]
    pub fn is_prize(&self) -> bool {
        self.amount.is_some()
    }

    /// Still in play from the banker's side: a non-player prize container
    /// that has not been opened.
    #[must_use]
    pub fn is_remaining(&self) -> bool {
        self.is_prize() && !self.is_player && !self.is_opened
    }

    /// Can the player open this container during `OpenCases`?
    #[must_use]
    pub fn is_openable(&self) -> bool {
        self.is_remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_id() {
        let id = ContainerId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Case(7)");
    }

    #[test]
    fn test_remaining() {
        let mut c = Container::with_amount(ContainerId::new(1), Money::from_units(100));
        assert!(c.is_prize());
        assert!(c.is_remaining());

        c.is_opened = true;
        assert!(!c.is_remaining());

        let mut own = Container::with_amount(ContainerId::new(2), Money::from_units(5));
        own.is_player = true;
        assert!(!own.is_remaining());

        let deco = Container::decorative(ContainerId::new(24));
        assert!(!deco.is_prize());
        assert!(!deco.is_openable());
    }
}
