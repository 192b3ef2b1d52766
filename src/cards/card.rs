use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards map bijectively onto `0..52` as `rank * 4 + suit`, so the
/// derived ordering sorts by play rank first and suit second. That order is
/// also the one used to sort a hand.
///
/// Cards are immutable values: equality and membership checks compare
/// the byte and nothing else.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u8);

impl Card {
    pub const COUNT: usize = Rank::COUNT * Suit::COUNT;

    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    pub fn all() -> impl Iterator<Item = Card> {
        (0..Self::COUNT as u8).map(Card)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// Th
/// 30
/// 0b00011110
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        assert!((n as usize) < Self::COUNT, "invalid card u8: {}", n);
        Self(n)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.len() {
            2 if s.is_ascii() => {
                let rank = Rank::try_from(&s[0..1])?;
                let suit = Suit::try_from(&s[1..2])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("expected 2 characters: {}", s)),
        }
    }
}

impl Card {
    /// Parses whitespace-separated or concatenated two-character cards.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.replace(char::is_whitespace, "")
            .chars()
            .collect::<Vec<_>>()
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Self::try_from(pair.as_str()))
            .collect::<Result<Vec<Self>, _>>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        for card in Card::all() {
            assert!(card == Card::from((card.rank(), card.suit())));
        }
    }

    #[test]
    fn bijective_u8() {
        for card in Card::all() {
            assert!(card == Card::from(u8::from(card)));
        }
    }

    #[test]
    fn sorts_by_rank_then_suit() {
        let mut cards = Card::parse("2c Ah 3s 3c Ts").unwrap();
        cards.sort();
        assert_eq!(cards, Card::parse("3c 3s Ts Ah 2c").unwrap());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Card::try_from("Xx").is_err());
        assert!(Card::try_from("Th ").is_ok());
        assert!(Card::parse("Th 9").is_err());
    }

    #[test]
    fn parse_rejects_wide_chars() {
        assert!(Card::try_from("é").is_err());
        assert!(Card::parse("3cé").is_err());
    }
}
