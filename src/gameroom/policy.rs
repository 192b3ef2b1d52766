use crate::cards::*;
use crate::gameplay::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Card selection for an automated seat.
///
/// Given the pile and the player's own view of itself, return a card from
/// the active zone, or `None` to give up and take the pile. From the
/// face-down reserve a policy must pick by position; it should not look at
/// what the position holds.
pub trait Policy: Send {
    fn choose(&mut self, pile: &Pile, player: &Player) -> Option<Card>;
}

/// Plays the lowest card that goes, keeping twos and tens back until
/// nothing else does. Blind, it turns over the first remaining position.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lowball;

impl Policy for Lowball {
    fn choose(&mut self, pile: &Pile, player: &Player) -> Option<Card> {
        if player.active().is_blind() {
            return player
                .offhand()
                .face_down()
                .filled()
                .next()
                .and_then(|i| player.offhand().face_down().get(i));
        }
        let legal = player
            .playable()
            .into_iter()
            .filter(|c| pile.accepts(*c))
            .collect::<Vec<_>>();
        legal
            .iter()
            .filter(|c| !c.rank().is_special())
            .min()
            .or_else(|| legal.iter().min())
            .copied()
    }
}

/// Chooses uniformly among legal cards, or a random position when blind.
#[derive(Debug)]
pub struct Fish(SmallRng);

impl Fish {
    pub fn new(rng: SmallRng) -> Self {
        Self(rng)
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl Policy for Fish {
    fn choose(&mut self, pile: &Pile, player: &Player) -> Option<Card> {
        if player.active().is_blind() {
            let down = player.offhand().face_down();
            return down
                .filled()
                .collect::<Vec<_>>()
                .choose(&mut self.0)
                .and_then(|i| down.get(*i));
        }
        player
            .playable()
            .into_iter()
            .filter(|c| pile.accepts(*c))
            .collect::<Vec<_>>()
            .choose(&mut self.0)
            .copied()
    }
}
