//! Sound cue classification.
//!
//! Maps game events to the cheer, aww, or laugh the host should play.
//! Playback and asset loading are the host's business.

use crate::core::{GameEvent, Money};

/// A sound to play. Cheers and awws come in five and three intensities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Cheer(u8),
    Aww(u8),
    Laugh,
}

impl SoundCue {
    /// Asset name, e.g. `cheer05`.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            SoundCue::Cheer(level) => format!("cheer{:02}", level),
            SoundCue::Aww(level) => format!("aww{:02}", level),
            SoundCue::Laugh => "laugh01".to_string(),
        }
    }
}

/// Outcomes below this many units get a laugh.
const LAUGH_BELOW: u64 = 50;

/// Cue for opening `amount` out of `pool`, the non-player amounts in play
/// just before the open.
///
/// Opening the smallest amount is the best outcome and opening the largest
/// the worst. In between, the cue follows the amount's position in the
/// sorted pool.
#[must_use]
pub fn case_open_cue(amount: Money, pool: &[Money]) -> Option<SoundCue> {
    let mut sorted = pool.to_vec();
    sorted.sort_unstable();
    let (&min, &max) = (sorted.first()?, sorted.last()?);

    if amount == min {
        return Some(SoundCue::Cheer(5));
    }
    if amount == max {
        return Some(SoundCue::Aww(3));
    }

    let position = sorted.iter().position(|&m| m == amount)?;
    let percentile = position as f64 / sorted.len() as f64;
    let cue = if amount.as_units() < median(&sorted) {
        match percentile {
            p if p <= 0.1 => SoundCue::Cheer(4),
            p if p <= 0.3 => SoundCue::Cheer(3),
            p if p <= 0.5 => SoundCue::Cheer(2),
            _ => SoundCue::Cheer(1),
        }
    } else if percentile >= 0.5 {
        SoundCue::Aww(2)
    } else {
        SoundCue::Aww(1)
    };
    Some(cue)
}

/// Cue for taking `offer` when the player's container held `own`.
#[must_use]
pub fn deal_accepted_cue(offer: Money, own: Money) -> SoundCue {
    if offer < Money::from_units(LAUGH_BELOW) {
        SoundCue::Laugh
    } else {
        comparison_cue(offer, own)
    }
}

/// Cue for revealing the player's container after a deal.
#[must_use]
pub fn reveal_cue(offer: Money, amount: Money) -> SoundCue {
    comparison_cue(offer, amount)
}

/// Cue for the final keep-or-swap.
#[must_use]
pub fn final_choice_cue(chosen: Money, other: Money) -> SoundCue {
    if chosen <= Money::from_units(LAUGH_BELOW) {
        SoundCue::Laugh
    } else if chosen > other {
        SoundCue::Cheer(5)
    } else {
        SoundCue::Aww(3)
    }
}

/// Cue for an event, if it has one.
#[must_use]
pub fn cue_for(event: &GameEvent) -> Option<SoundCue> {
    match event {
        GameEvent::ContainerOpened { amount, pool, .. } => case_open_cue(*amount, pool),
        GameEvent::DealAccepted { offer, own_amount } => Some(deal_accepted_cue(*offer, *own_amount)),
        GameEvent::FinalChoiceMade { chosen, other, .. } => Some(final_choice_cue(*chosen, *other)),
        GameEvent::BriefcaseRevealed { amount, offer } => Some(reveal_cue(*offer, *amount)),
        _ => None,
    }
}

/// Did the deal beat what was in the container, and by how much?
fn comparison_cue(offer: Money, own: Money) -> SoundCue {
    let diff = offer.abs_diff(own);
    if own > offer {
        match diff {
            d if d <= Money::from_units(200) => SoundCue::Aww(1),
            d if d <= Money::from_units(1000) => SoundCue::Aww(2),
            _ => SoundCue::Aww(3),
        }
    } else {
        match diff {
            d if d <= Money::from_units(100) => SoundCue::Cheer(1),
            d if d <= Money::from_units(250) => SoundCue::Cheer(2),
            d if d <= Money::from_units(500) => SoundCue::Cheer(3),
            d if d <= Money::from_units(1000) => SoundCue::Cheer(4),
            _ => SoundCue::Cheer(5),
        }
    }
}

fn median(sorted: &[Money]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1].as_units() + sorted[mid].as_units()) / 2.0
    } else {
        sorted[mid].as_units()
    }
}
