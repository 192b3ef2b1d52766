//! Playability and burn rules.
//!
//! Pure, total functions over cards and pile slices. The engine treats
//! their answers as ground truth for legality.
use super::card::Card;
use crate::BURN_RUN;
use std::cmp::Ordering;

/// Whether `card` may be laid on top of `pile`.
///
/// - anything goes on an empty pile
/// - wild and burn cards go on anything
/// - anything goes on a wild card
/// - otherwise the rank must match or beat the top
pub fn playable(card: Card, pile: &[Card]) -> bool {
    match pile.last() {
        None => true,
        Some(_) if card.rank().is_special() => true,
        Some(top) if top.rank().is_wild() => true,
        Some(top) => card.rank() >= top.rank(),
    }
}

/// Whether `pile` should be cleared: a burn card on top, or the last
/// `BURN_RUN` cards sharing a rank.
pub fn burnable(pile: &[Card]) -> bool {
    match pile.last() {
        None => false,
        Some(top) if top.rank().is_burner() => true,
        Some(top) => {
            pile.len() >= BURN_RUN
                && pile
                    .iter()
                    .rev()
                    .take(BURN_RUN)
                    .all(|c| c.rank() == top.rank())
        }
    }
}

/// Hand sorting order.
pub fn compare(a: &Card, b: &Card) -> Ordering {
    a.cmp(b)
}
