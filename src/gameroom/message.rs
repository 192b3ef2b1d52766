use crate::cards::*;
use crate::engine::*;

/// What an adapter's mailbox carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The engine wants a card.
    Ask(Ask),
    /// A front end picked on the human's behalf.
    Choose(Pick),
}

/// A human's selection, before it is matched to the pending ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Pick {
    /// A card the human can see, optionally with how many of its rank to play.
    Card { card: Card, n: Option<usize> },
    /// A face-down position, chosen without seeing it.
    Blind(usize),
}

impl Pick {
    /// Turn the pick into a reply to `ask`. A blind pick of an empty
    /// position has no answer.
    pub fn resolve(&self, ask: &Ask) -> Option<Chosen> {
        match *self {
            Pick::Card { card, n } => Some(Chosen {
                seq: ask.seq,
                card: Some(card),
                n,
            }),
            Pick::Blind(index) => ask
                .player
                .offhand()
                .face_down()
                .get(index)
                .map(|card| Chosen::card(ask.seq, card)),
        }
    }
}

impl std::fmt::Display for Pick {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Pick::Card { card, n: None } => write!(f, "{}", card),
            Pick::Card { card, n: Some(n) } => write!(f, "{} x{}", card, n),
            Pick::Blind(index) => write!(f, "face-down #{}", index),
        }
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Message::Ask(ask) => write!(f, "{}", ask),
            Message::Choose(pick) => write!(f, "pick {}", pick),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::*;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }
    fn ask() -> Ask {
        let mut down = Reserve::from([card("3c"), card("4c"), card("5c")]);
        down.take(1);
        Ask {
            seq: 9,
            pile: Pile::default(),
            player: Player::new(vec![], OffHand::new(Reserve::default(), down)),
        }
    }

    #[test]
    fn blind_pick_resolves_by_position() {
        assert_eq!(Pick::Blind(2).resolve(&ask()), Some(Chosen::card(9, card("5c"))));
        assert_eq!(Pick::Blind(1).resolve(&ask()), None);
        assert_eq!(Pick::Blind(5).resolve(&ask()), None);
    }

    #[test]
    fn card_pick_carries_count() {
        let pick = Pick::Card {
            card: card("8d"),
            n: Some(2),
        };
        assert_eq!(pick.resolve(&ask()), Some(Chosen::multi(9, card("8d"), 2)));
    }
}
