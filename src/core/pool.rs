//! Prize pool initialization.
//!
//! Produces `container_count` containers with ids `1..=container_count`.
//! The last `decorative_count` ids hold no prize; the rest receive a
//! uniform random permutation of the prize table.

use im::Vector;

use super::config::{ConfigError, GameConfig};
use super::container::{Container, ContainerId};
use super::money::Money;
use super::rng::RandomSource;

/// Build a shuffled set of containers from `table`.
///
/// Fails if the table size does not match the number of prize slots. The
/// table is never truncated or padded.
pub fn initialize_containers<R: RandomSource>(
    config: &GameConfig,
    table: &[Money],
    rng: &mut R,
) -> Result<Vector<Container>, ConfigError> {
    if config.decorative_count > config.container_count {
        return Err(ConfigError::TooManyDecorative {
            containers: config.container_count,
            decorative: config.decorative_count,
        });
    }
    let slots = config.prize_slots();
    if table.len() != slots {
        return Err(ConfigError::PrizeTableSize {
            expected: slots,
            actual: table.len(),
        });
    }

    let mut amounts = table.to_vec();
    rng.shuffle(&mut amounts);

    let mut containers = Vector::new();
    for (index, amount) in amounts.into_iter().enumerate() {
        containers.push_back(Container::with_amount(ContainerId::new(index as u32 + 1), amount));
    }
    for id in (slots + 1)..=config.container_count {
        containers.push_back(Container::decorative(ContainerId::new(id as u32)));
    }

    Ok(containers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{GameRng, ScriptedRandom};

    #[test]
    fn test_layout() {
        let config = GameConfig::default();
        let containers =
            initialize_containers(&config, config.table(false), &mut GameRng::new(42)).unwrap();

        assert_eq!(containers.len(), 24);
        for (i, c) in containers.iter().enumerate() {
            assert_eq!(c.id, ContainerId::new(i as u32 + 1));
            assert!(!c.is_opened);
            assert!(!c.is_player);
        }
        assert!(containers[22].amount.is_none());
        assert!(containers[23].amount.is_none());
        assert_eq!(containers.iter().filter(|c| c.amount.is_none()).count(), 2);
    }

    #[test]
    fn test_amounts_are_a_permutation() {
        let config = GameConfig::default();
        let containers =
            initialize_containers(&config, config.table(false), &mut GameRng::new(7)).unwrap();

        let mut amounts: Vec<Money> = containers.iter().filter_map(|c| c.amount).collect();
        amounts.sort();
        let mut expected = config.prize_table.clone();
        expected.sort();
        assert_eq!(amounts, expected);
    }

    #[test]
    fn test_shuffle_uses_injected_source() {
        let config = GameConfig::default();
        // Picking the last index at every step leaves the table in order.
        let containers =
            initialize_containers(&config, config.table(false), &mut ScriptedRandom::constant(0.999))
                .unwrap();
        let amounts: Vec<Money> = containers.iter().filter_map(|c| c.amount).collect();
        assert_eq!(amounts, config.prize_table);
    }

    #[test]
    fn test_table_size_mismatch_is_fatal() {
        let config = GameConfig::default();
        let short = vec![Money::from_units(1); 21];
        let err = initialize_containers(&config, &short, &mut GameRng::new(1)).unwrap_err();
        assert_eq!(err, ConfigError::PrizeTableSize { expected: 22, actual: 21 });
    }
}
