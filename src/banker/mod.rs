//! The simulated banker: offers and the remarks that come with them.
//!
//! Both halves are pure functions of the container state plus an injected
//! random source, so an offer can be recomputed in isolation.

pub mod offer;
pub mod remark;

use serde::{Deserialize, Serialize};

use crate::core::{Container, Money, RandomSource};

pub use offer::{calculate_offer, offer_for_pool, unopened_pool, Pool};
pub use remark::{categorize, select_remark, Remark, RemarkCategory, RemarkStrategy};

/// An offer on the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankerOffer {
    pub amount: Money,
    pub remark: Remark,
}

/// Price the containers and pick a remark for the price.
///
/// Draws once for the offer and once for the remark line, in that order.
pub fn make_offer<'a, I, R>(containers: I, strategy: RemarkStrategy, rng: &mut R) -> BankerOffer
where
    I: IntoIterator<Item = &'a Container> + Clone,
    R: RandomSource,
{
    let amount = calculate_offer(containers.clone(), rng);
    let remaining: Vec<Money> = containers
        .into_iter()
        .filter(|c| c.is_remaining())
        .filter_map(|c| c.amount)
        .collect();
    let remark = select_remark(strategy, amount, &remaining, rng);
    BankerOffer { amount, remark }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ContainerId, ScriptedRandom};

    #[test]
    fn test_make_offer_two_left() {
        let mut own = Container::with_amount(ContainerId::new(1), Money::from_units(100));
        own.is_player = true;
        own.is_opened = true;
        let last = Container::with_amount(ContainerId::new(2), Money::from_units(500));
        let containers = vec![own, last];

        let offer = make_offer(&containers, RemarkStrategy::Relative, &mut ScriptedRandom::constant(0.5));
        assert_eq!(offer.amount, Money::from_units(300));
        // 300 against the one remaining 500 is a 0.6 ratio.
        assert_eq!(offer.remark.category, RemarkCategory::Fair);
    }
}
