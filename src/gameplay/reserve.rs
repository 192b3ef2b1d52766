use crate::SLOTS;
use crate::cards::*;

/// Three fixed positions, each holding a card or nothing.
///
/// Positions are addressed by index. A blind chooser cannot see what a
/// position holds, so it never selects by value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Reserve([Option<Card>; SLOTS]);

impl From<[Card; SLOTS]> for Reserve {
    fn from(cards: [Card; SLOTS]) -> Self {
        Self(cards.map(Some))
    }
}
impl TryFrom<Vec<Card>> for Reserve {
    type Error = String;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        match cards.len() {
            n if n > SLOTS => Err(format!("{} cards exceed {} slots", n, SLOTS)),
            _ => {
                let mut reserve = Self::default();
                cards.into_iter().for_each(|c| {
                    reserve.place(c);
                });
                Ok(reserve)
            }
        }
    }
}

impl Reserve {
    pub fn slots(&self) -> &[Option<Card>; SLOTS] {
        &self.0
    }
    pub fn get(&self, index: usize) -> Option<Card> {
        self.0.get(index).copied().flatten()
    }
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.0.iter().flatten().copied()
    }
    pub fn count(&self) -> usize {
        self.cards().count()
    }
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }
    pub fn contains(&self, card: Card) -> bool {
        self.position(card).is_some()
    }
    pub fn position(&self, card: Card) -> Option<usize> {
        self.0.iter().position(|slot| *slot == Some(card))
    }
    /// Indices of positions still holding a card.
    pub fn filled(&self) -> impl Iterator<Item = usize> + '_ {
        (0..SLOTS).filter(|i| self.0[*i].is_some())
    }
    /// Put a card in the first open position. False when every position is taken.
    pub fn place(&mut self, card: Card) -> bool {
        match self.0.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                *slot = Some(card);
                true
            }
            None => false,
        }
    }
    /// Empty a position, returning what it held.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        self.0.get_mut(index).and_then(Option::take)
    }
    pub fn remove(&mut self, card: Card) -> bool {
        self.position(card).and_then(|i| self.take(i)).is_some()
    }
    pub fn drain(&mut self) -> Vec<Card> {
        self.0.iter_mut().filter_map(Option::take).collect()
    }
}

impl std::fmt::Display for Reserve {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.0
                .iter()
                .map(|slot| slot.map_or_else(|| String::from("__"), |c| c.to_string()))
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    #[test]
    fn place_fills_first_gap() {
        let mut reserve = Reserve::from([card("3c"), card("4c"), card("5c")]);
        assert!(!reserve.place(card("6c")));
        assert_eq!(reserve.take(1), Some(card("4c")));
        assert!(reserve.place(card("6c")));
        assert_eq!(reserve.get(1), Some(card("6c")));
    }

    #[test]
    fn take_by_position() {
        let mut reserve = Reserve::from([card("3c"), card("4c"), card("5c")]);
        assert_eq!(reserve.take(2), Some(card("5c")));
        assert_eq!(reserve.take(2), None);
        assert_eq!(reserve.take(7), None);
        assert_eq!(reserve.filled().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(reserve.slots().len(), SLOTS);
    }

    #[test]
    fn remove_by_value() {
        let mut reserve = Reserve::from([card("3c"), card("4c"), card("5c")]);
        assert!(reserve.remove(card("3c")));
        assert!(!reserve.remove(card("3c")));
        assert_eq!(reserve.count(), 2);
        assert_eq!(reserve.to_string(), "[__ 4c 5c]");
    }

    #[test]
    fn try_from_rejects_overflow() {
        assert!(Reserve::try_from(Card::parse("3c 4c 5c 6c").unwrap()).is_err());
        let partial = Reserve::try_from(Card::parse("3c").unwrap()).unwrap();
        assert_eq!(partial.count(), 1);
        assert!(!partial.is_full());
    }
}
