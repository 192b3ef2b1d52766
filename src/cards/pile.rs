use super::card::Card;
use super::rules;

/// Cards played in the current run, oldest first. The last card is the top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Pile(Vec<Card>);

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
impl From<Pile> for Vec<Card> {
    fn from(pile: Pile) -> Self {
        pile.0
    }
}

impl Pile {
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn top(&self) -> Option<Card> {
        self.0.last().copied()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }
    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.0.extend(cards);
    }
    /// Empty the pile, handing back everything it held.
    pub fn drain(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.0)
    }
    pub fn accepts(&self, card: Card) -> bool {
        rules::playable(card, &self.0)
    }
    pub fn is_burnable(&self) -> bool {
        rules::burnable(&self.0)
    }
    /// Whether the top card was a legal play onto the cards beneath it.
    /// Blind plays can leave a top that was not.
    pub fn is_settled(&self) -> bool {
        match self.0.split_last() {
            None => true,
            Some((top, rest)) => rules::playable(*top, rest),
        }
    }
}

impl std::fmt::Display for Pile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0.is_empty() {
            true => write!(f, "(empty)"),
            false => write!(
                f,
                "{}",
                self.0
                    .iter()
                    .map(Card::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            ),
        }
    }
}
