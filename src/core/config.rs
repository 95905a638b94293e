//! Game configuration types.
//!
//! The engine never hardcodes the prize table, the round quotas, or the
//! banker's thinking delays. Games provide them via `GameConfig`:
//! - `prize_table` / `kids_prize_table`: amounts shuffled into containers
//! - `round_quotas`: containers to open before each banker call
//! - `thinking_delays`: per-round bounds for the banker's thinking timer
//! - `remark_strategy`: how offers map to narrative remark categories

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::money::Money;
use super::rng::RandomSource;
use crate::banker::RemarkStrategy;

/// Standard prize table, left column of the prize board (in centavos).
pub const STANDARD_LEFT_COLUMN: [u64; 11] = [
    5, 100, 500, 1_000, 2_000, 5_000, 10_000, 12_500, 15_000, 20_000, 25_000,
];

/// Standard prize table, right column of the prize board (in centavos).
pub const STANDARD_RIGHT_COLUMN: [u64; 11] = [
    30_000, 35_000, 40_000, 45_000, 50_000, 60_000, 70_000, 80_000, 100_000, 200_000, 400_000,
];

/// Kids-mode table: smaller spread, nothing below one unit.
pub const KIDS_TABLE: [u64; 22] = [
    100, 200, 300, 500, 1_000, 1_500, 2_000, 2_500, 3_000, 4_000, 5_000, 6_000, 7_500, 10_000,
    12_500, 15_000, 20_000, 25_000, 30_000, 40_000, 50_000, 75_000,
];

/// Default per-round quotas.
pub const DEFAULT_ROUND_QUOTAS: [usize; 6] = [6, 5, 4, 3, 2, 1];

/// Configuration defects. These are fatal: the engine refuses to start.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("prize table has {actual} values, expected {expected}")]
    PrizeTableSize { expected: usize, actual: usize },
    #[error("decorative container count {decorative} exceeds container count {containers}")]
    TooManyDecorative { containers: usize, decorative: usize },
    #[error("round quota schedule is empty")]
    EmptyQuotas,
    #[error("round {round} has a zero quota")]
    ZeroQuota { round: usize },
    #[error("rounds through {round} open {cumulative} containers, only {available} can be opened")]
    QuotaExceedsPool { round: usize, cumulative: usize, available: usize },
    #[error("thinking delay for round {round} has min {min_ms}ms > max {max_ms}ms")]
    InvertedDelay { round: usize, min_ms: u64, max_ms: u64 },
    #[error("invalid configuration JSON: {0}")]
    Json(String),
}

/// Inclusive bounds, in milliseconds, for one round's thinking delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayBounds {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayBounds {
    /// Create delay bounds.
    #[must_use]
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Sample a delay uniformly from `[min, max)`.
    pub fn sample<R: RandomSource>(&self, rng: &mut R) -> Duration {
        let span = self.max_ms.saturating_sub(self.min_ms) as f64;
        let ms = self.min_ms as f64 + rng.next_unit() * span;
        Duration::from_secs_f64(ms / 1000.0)
    }
}

/// Thinking delay bounds: one entry per early round, then a fallback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkingDelays {
    /// Bounds for rounds `0..per_round.len()`.
    pub per_round: Vec<DelayBounds>,
    /// Bounds for every later round.
    pub fallback: DelayBounds,
}

impl Default for ThinkingDelays {
    fn default() -> Self {
        Self {
            per_round: vec![
                DelayBounds::new(10_000, 20_000),
                DelayBounds::new(7_500, 15_000),
                DelayBounds::new(5_000, 15_000),
            ],
            fallback: DelayBounds::new(2_500, 12_500),
        }
    }
}

impl ThinkingDelays {
    /// Bounds that apply to `round`.
    #[must_use]
    pub fn for_round(&self, round: usize) -> DelayBounds {
        self.per_round.get(round).copied().unwrap_or(self.fallback)
    }

    /// Zero delay in every round. Handy for tests and headless play.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            per_round: Vec::new(),
            fallback: DelayBounds::new(0, 0),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Total containers, decorative ones included.
    pub container_count: usize,

    /// Containers with no prize. They take the highest ids.
    pub decorative_count: usize,

    /// Standard prize amounts.
    pub prize_table: Vec<Money>,

    /// Gentler prize amounts used in kids mode.
    pub kids_prize_table: Vec<Money>,

    /// Containers to open per round.
    pub round_quotas: Vec<usize>,

    /// Banker thinking delay bounds.
    pub thinking_delays: ThinkingDelays,

    /// How offers map to remark categories.
    pub remark_strategy: RemarkStrategy,
}

impl Default for GameConfig {
    fn default() -> Self {
        let prize_table = STANDARD_LEFT_COLUMN
            .iter()
            .chain(STANDARD_RIGHT_COLUMN.iter())
            .map(|&c| Money::from_cents(c))
            .collect();

        Self {
            container_count: 24,
            decorative_count: 2,
            prize_table,
            kids_prize_table: KIDS_TABLE.iter().map(|&c| Money::from_cents(c)).collect(),
            round_quotas: DEFAULT_ROUND_QUOTAS.to_vec(),
            thinking_delays: ThinkingDelays::default(),
            remark_strategy: RemarkStrategy::Relative,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the standard prize table.
    #[must_use]
    pub fn with_prize_table(mut self, table: Vec<Money>) -> Self {
        self.prize_table = table;
        self
    }

    /// Replace the kids-mode prize table.
    #[must_use]
    pub fn with_kids_prize_table(mut self, table: Vec<Money>) -> Self {
        self.kids_prize_table = table;
        self
    }

    /// Replace the round quota schedule.
    #[must_use]
    pub fn with_round_quotas(mut self, quotas: Vec<usize>) -> Self {
        self.round_quotas = quotas;
        self
    }

    /// Replace the thinking delay bounds.
    #[must_use]
    pub fn with_thinking_delays(mut self, delays: ThinkingDelays) -> Self {
        self.thinking_delays = delays;
        self
    }

    /// Set the remark strategy.
    #[must_use]
    pub fn with_remark_strategy(mut self, strategy: RemarkStrategy) -> Self {
        self.remark_strategy = strategy;
        self
    }

    /// Number of containers that carry a prize.
    #[must_use]
    pub fn prize_slots(&self) -> usize {
        self.container_count.saturating_sub(self.decorative_count)
    }

    /// The prize table for the chosen mode.
    #[must_use]
    pub fn table(&self, kids_mode: bool) -> &[Money] {
        if kids_mode {
            &self.kids_prize_table
        } else {
            &self.prize_table
        }
    }

    /// Quota for `round`, or `None` past the end of the schedule.
    #[must_use]
    pub fn quota(&self, round: usize) -> Option<usize> {
        self.round_quotas.get(round).copied()
    }

    /// Index of the last scheduled round.
    #[must_use]
    pub fn last_round(&self) -> usize {
        self.round_quotas.len().saturating_sub(1)
    }

    /// Check every invariant the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decorative_count > self.container_count {
            return Err(ConfigError::TooManyDecorative {
                containers: self.container_count,
                decorative: self.decorative_count,
            });
        }
        for table in [&self.prize_table, &self.kids_prize_table] {
            if table.len() != self.prize_slots() {
                return Err(ConfigError::PrizeTableSize {
                    expected: self.prize_slots(),
                    actual: table.len(),
                });
            }
        }
        if self.round_quotas.is_empty() {
            return Err(ConfigError::EmptyQuotas);
        }
        if let Some(round) = self.round_quotas.iter().position(|&q| q == 0) {
            return Err(ConfigError::ZeroQuota { round });
        }
        // The player's container is never opened.
        let available = self.prize_slots().saturating_sub(1);
        let mut cumulative = 0;
        for (round, &quota) in self.round_quotas.iter().enumerate() {
            cumulative += quota;
            if cumulative > available {
                return Err(ConfigError::QuotaExceedsPool {
                    round,
                    cumulative,
                    available,
                });
            }
        }
        let bounds = self
            .thinking_delays
            .per_round
            .iter()
            .copied()
            .chain(std::iter::once(self.thinking_delays.fallback));
        for (round, b) in bounds.enumerate() {
            if b.min_ms > b.max_ms {
                return Err(ConfigError::InvertedDelay {
                    round,
                    min_ms: b.min_ms,
                    max_ms: b.max_ms,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedRandom;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.prize_slots(), 22);
        assert_eq!(config.prize_table.len(), 22);
        assert_eq!(config.kids_prize_table.len(), 22);
        assert_eq!(config.round_quotas, vec![6, 5, 4, 3, 2, 1]);
        assert_eq!(config.last_round(), 5);
        assert_eq!(config.quota(0), Some(6));
        assert_eq!(config.quota(6), None);
    }

    #[test]
    fn test_standard_table_extremes() {
        let config = GameConfig::default();
        assert_eq!(config.table(false)[0], Money::from_cents(5));
        assert_eq!(config.table(false)[21], Money::from_units(4000));
        assert_eq!(config.table(true)[0], Money::from_units(1));
    }

    #[test]
    fn test_table_size_mismatch() {
        let config = GameConfig::default().with_prize_table(vec![Money::from_units(1); 21]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::PrizeTableSize { expected: 22, actual: 21 })
        );

        let config = GameConfig::default().with_kids_prize_table(vec![Money::from_units(1); 23]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::PrizeTableSize { expected: 22, actual: 23 })
        );
    }

    #[test]
    fn test_quota_validation() {
        let config = GameConfig::default().with_round_quotas(vec![]);
        assert_eq!(config.validate(), Err(ConfigError::EmptyQuotas));

        let config = GameConfig::default().with_round_quotas(vec![6, 0, 4]);
        assert_eq!(config.validate(), Err(ConfigError::ZeroQuota { round: 1 }));
    }

    #[test]
    fn test_quota_schedule_must_fit_pool() {
        let config = GameConfig::default().with_round_quotas(vec![10, 15]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::QuotaExceedsPool { round: 1, cumulative: 25, available: 21 })
        );

        let config = GameConfig::default().with_round_quotas(vec![21]);
        assert_eq!(config.validate(), Ok(()));
        let config = GameConfig::default().with_round_quotas(vec![6, 5, 4, 3, 2, 1, 1]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::QuotaExceedsPool { round: 6, cumulative: 22, available: 21 })
        );
    }

    #[test]
    fn test_inverted_delay() {
        let delays = ThinkingDelays {
            per_round: vec![DelayBounds::new(10, 5)],
            fallback: DelayBounds::new(0, 0),
        };
        let config = GameConfig::default().with_thinking_delays(delays);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedDelay { round: 0, min_ms: 10, max_ms: 5 })
        );
    }

    #[test]
    fn test_delay_bounds_per_round() {
        let delays = ThinkingDelays::default();
        assert_eq!(delays.for_round(0), DelayBounds::new(10_000, 20_000));
        assert_eq!(delays.for_round(1), DelayBounds::new(7_500, 15_000));
        assert_eq!(delays.for_round(2), DelayBounds::new(5_000, 15_000));
        assert_eq!(delays.for_round(3), DelayBounds::new(2_500, 12_500));
        assert_eq!(delays.for_round(9), DelayBounds::new(2_500, 12_500));
    }

    #[test]
    fn test_delay_sample() {
        let bounds = DelayBounds::new(10_000, 20_000);
        assert_eq!(bounds.sample(&mut ScriptedRandom::constant(0.0)), Duration::from_secs(10));
        assert_eq!(bounds.sample(&mut ScriptedRandom::constant(0.5)), Duration::from_secs(15));
    }

    #[test]
    fn test_json_defaults_and_overrides() {
        let config = GameConfig::from_json(r#"{ "round_quotas": [6, 5, 4, 3, 2, 1] }"#).unwrap();
        assert_eq!(config, GameConfig::default());

        let config = GameConfig::from_json(r#"{ "remark_strategy": "Absolute" }"#).unwrap();
        assert_eq!(config.remark_strategy, RemarkStrategy::Absolute);

        let err = GameConfig::from_json(r#"{ "prize_table": [100, 200] }"#).unwrap_err();
        assert_eq!(err, ConfigError::PrizeTableSize { expected: 22, actual: 2 });

        assert!(matches!(GameConfig::from_json("not json"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
