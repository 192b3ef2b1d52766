use super::reserve::Reserve;
use super::zone::Zone;
use crate::cards::*;

/// The two reserves laid in front of a player.
///
/// Face-down positions are only ever emptied: there is no way to put a card
/// back into one once the deal is done.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct OffHand {
    face_up: Reserve,
    face_down: Reserve,
}

impl OffHand {
    pub fn new(face_up: Reserve, face_down: Reserve) -> Self {
        Self { face_up, face_down }
    }
    pub fn face_up(&self) -> &Reserve {
        &self.face_up
    }
    pub fn face_down(&self) -> &Reserve {
        &self.face_down
    }
    pub fn count(&self) -> usize {
        self.face_up.count() + self.face_down.count()
    }
}

/// A hand plus an offhand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    hand: Vec<Card>,
    offhand: OffHand,
}

impl Player {
    pub fn new(hand: Vec<Card>, offhand: OffHand) -> Self {
        Self { hand, offhand }
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn offhand(&self) -> &OffHand {
        &self.offhand
    }
    /// Cards held anywhere.
    pub fn total(&self) -> usize {
        self.hand.len() + self.offhand.count()
    }
    pub fn is_out(&self) -> bool {
        self.total() == 0
    }
    /// Hand while it has cards, then the face-up reserve, then face-down.
    pub fn active(&self) -> Zone {
        if !self.hand.is_empty() {
            Zone::Hand
        } else if !self.offhand.face_up.is_empty() {
            Zone::FaceUp
        } else {
            Zone::FaceDown
        }
    }
    /// Cards in the active zone. Face-down identities are included;
    /// a blind chooser must still pick by position.
    pub fn playable(&self) -> Vec<Card> {
        match self.active() {
            Zone::Hand => self.hand.clone(),
            Zone::FaceUp => self.offhand.face_up.cards().collect(),
            Zone::FaceDown => self.offhand.face_down.cards().collect(),
        }
    }
    /// Whether `card` sits in the active zone.
    pub fn holds(&self, card: Card) -> bool {
        match self.active() {
            Zone::Hand => self.hand.contains(&card),
            Zone::FaceUp => self.offhand.face_up.contains(card),
            Zone::FaceDown => self.offhand.face_down.contains(card),
        }
    }
}

impl Player {
    pub(crate) fn sort_hand(&mut self) {
        self.hand.sort_by(rules::compare);
    }
    pub(crate) fn receive<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.hand.extend(cards);
    }
    /// Move a hand card into the next open face-up position.
    pub(crate) fn reserve(&mut self, card: Card) -> bool {
        match self.hand.iter().position(|c| *c == card) {
            Some(i) if !self.offhand.face_up.is_full() => {
                self.hand.remove(i);
                self.offhand.face_up.place(card)
            }
            _ => false,
        }
    }
    /// Move the first `n` hand cards face up.
    pub(crate) fn stash(&mut self, n: usize) {
        let n = n.min(self.hand.len());
        self.hand
            .drain(..n)
            .collect::<Vec<_>>()
            .into_iter()
            .for_each(|c| {
                self.offhand.face_up.place(c);
            });
    }
    /// Remove `card` from the active zone, together with up to `n - 1`
    /// further cards of the same rank when `n` is given. Face-down plays are
    /// always single. Returns the released cards, chosen card first; empty
    /// if `card` is not in the active zone.
    pub(crate) fn release(&mut self, card: Card, n: Option<usize>) -> Vec<Card> {
        if !self.holds(card) {
            return Vec::new();
        }
        let zone = self.active();
        if zone.is_blind() {
            return self.offhand.face_down.remove(card).then_some(card).into_iter().collect();
        }
        let extra = n.map_or(0, |n| n.saturating_sub(1));
        let released = std::iter::once(card)
            .chain(
                self.playable()
                    .into_iter()
                    .filter(|c| *c != card)
                    .filter(|c| c.rank() == card.rank())
                    .take(extra),
            )
            .collect::<Vec<_>>();
        match zone {
            Zone::Hand => self.hand.retain(|c| !released.contains(c)),
            _ => released.iter().for_each(|c| {
                self.offhand.face_up.remove(*c);
            }),
        }
        released
    }
    /// Give up every card held.
    pub(crate) fn drain(&mut self) -> Vec<Card> {
        let mut cards = std::mem::take(&mut self.hand);
        cards.extend(self.offhand.face_up.drain());
        cards.extend(self.offhand.face_down.drain());
        cards
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "hand {} | up {} | down {} cards",
            self.hand
                .iter()
                .map(Card::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            self.offhand.face_up,
            self.offhand.face_down.count()
        )
    }
}
