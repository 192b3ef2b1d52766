use super::card::Card;
use rand::Rng;
use rand::seq::SliceRandom;

/// Cards not yet dealt. Drawing pops from the top (the end of the vector).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.draw()
    }
}

impl Deck {
    /// All 52 cards in canonical order.
    pub fn new() -> Self {
        Self(Card::all().collect())
    }
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }
    /// Remove `n` cards from the top.
    pub fn deal(&mut self, n: usize) -> Vec<Card> {
        assert!(n <= self.0.len(), "cannot deal {} from {}", n, self.0.len());
        self.0.split_off(self.0.len() - n)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
