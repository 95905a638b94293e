//! Narrative remarks attached to banker offers.

use serde::{Deserialize, Serialize};

use crate::core::{Money, RandomSource};

/// How good an offer looks, worst to best.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RemarkCategory {
    Terrible,
    Poor,
    Fair,
    Good,
    Excellent,
}

impl RemarkCategory {
    /// All categories in ascending order.
    pub const ALL: [RemarkCategory; 5] = [
        RemarkCategory::Terrible,
        RemarkCategory::Poor,
        RemarkCategory::Fair,
        RemarkCategory::Good,
        RemarkCategory::Excellent,
    ];

    /// Flavor lines for this category.
    #[must_use]
    pub fn lines(self) -> &'static [&'static str] {
        match self {
            RemarkCategory::Terrible => &TERRIBLE,
            RemarkCategory::Poor => &POOR,
            RemarkCategory::Fair => &FAIR,
            RemarkCategory::Good => &GOOD,
            RemarkCategory::Excellent => &EXCELLENT,
        }
    }

    /// Category for a value that cleared `rank` breakpoints.
    fn from_rank(rank: usize) -> Self {
        Self::ALL[rank.min(Self::ALL.len() - 1)]
    }
}

/// How an offer is mapped to a category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemarkStrategy {
    /// Ratio of the offer to the mean of the remaining non-player amounts,
    /// with breakpoints at 0.3 / 0.6 / 0.9 / 1.2. Scales with the stakes.
    #[default]
    Relative,
    /// Fixed offer thresholds at 250 / 500 / 750 / 1000 units. Only
    /// sensible for a fixed, low-stakes prize table.
    Absolute,
}

const RELATIVE_BREAKPOINTS: [f64; 4] = [0.3, 0.6, 0.9, 1.2];
const ABSOLUTE_BREAKPOINTS: [f64; 4] = [250.0, 500.0, 750.0, 1000.0];

/// A category and the line picked from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remark {
    pub category: RemarkCategory,
    pub line: String,
}

/// Categorize `offer`.
///
/// `remaining` are the unopened non-player amounts. Under `Relative`, an
/// empty `remaining` has no mean to compare against and yields `Fair`.
#[must_use]
pub fn categorize(strategy: RemarkStrategy, offer: Money, remaining: &[Money]) -> RemarkCategory {
    let (value, breakpoints) = match strategy {
        RemarkStrategy::Relative => {
            if remaining.is_empty() {
                return RemarkCategory::Fair;
            }
            let total: f64 = remaining.iter().map(|m| m.as_units()).sum();
            let mean = total / remaining.len() as f64;
            if mean <= 0.0 {
                return RemarkCategory::Excellent;
            }
            (offer.as_units() / mean, &RELATIVE_BREAKPOINTS)
        }
        RemarkStrategy::Absolute => (offer.as_units(), &ABSOLUTE_BREAKPOINTS),
    };

    let rank = breakpoints.iter().take_while(|&&b| value >= b).count();
    RemarkCategory::from_rank(rank)
}

/// Categorize `offer` and pick one of the category's lines uniformly.
pub fn select_remark<R: RandomSource>(
    strategy: RemarkStrategy,
    offer: Money,
    remaining: &[Money],
    rng: &mut R,
) -> Remark {
    let category = categorize(strategy, offer, remaining);
    let line = rng.choose(category.lines()).copied().unwrap_or_default();
    Remark {
        category,
        line: line.to_string(),
    }
}

const TERRIBLE: [&str; 5] = [
    "Is that a joke? This has to be a mistake!",
    "The banker must be laughing all the way to the bank with that offer!",
    "That's not an offer, that's an insult wrapped in pesos!",
    "Is the banker even awake??",
    "The banker thinks you were born yesterday!",
];

const POOR: [&str; 5] = [
    "Hmm, the banker is being a bit stingy today...",
    "That's barely enough for a meal, let alone life-changing money!",
    "The banker is clearly hoping you'll panic!",
    "Who is the banker anyway??!",
    "That offer is weaker than my morning coffee!",
];

const FAIR: [&str; 5] = [
    "Now we're talking! A respectable offer on the table.",
    "The banker is playing it safe with this one.",
    "Not bad, not bad at all... but is it enough?",
    "A solid offer, but there could be more in your case!",
    "The banker is being reasonable... suspiciously reasonable!",
];

const GOOD: [&str; 5] = [
    "WOW! The banker is getting nervous!",
    "That's a serious offer! Someone's sweating in that bank!",
    "The banker must really want you to take this deal!",
    "Now THAT'S what I call an offer! The banker sees something!",
    "Holy pesos! The banker is practically begging you to stop!",
];

const EXCELLENT: [&str; 5] = [
    "JACKPOT ALERT! The banker is in full panic mode!",
    "That's an INSANE offer! The banker knows you've got the goods!",
    "The banker is about to go broke!",
    "I can hear the banker crying from here with that offer!",
    "That's 'retire early' money right there! The banker is DESPERATE!",
];
