use crate::cards::*;
use crate::gameplay::*;

/// Request for a card, sent to whichever side holds the turn.
///
/// Carries a snapshot of what the asked player may see. `seq` identifies
/// the ask; a reply is only honored if it echoes the outstanding one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Ask {
    pub seq: u64,
    pub pile: Pile,
    pub player: Player,
}

/// Reply to an [`Ask`]. No card means the player cannot or will not play.
/// `n` asks for up to that many cards of the chosen rank to go down together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Chosen {
    pub seq: u64,
    pub card: Option<Card>,
    pub n: Option<usize>,
}

impl Chosen {
    pub fn card(seq: u64, card: Card) -> Self {
        Self {
            seq,
            card: Some(card),
            n: None,
        }
    }
    pub fn multi(seq: u64, card: Card, n: usize) -> Self {
        Self {
            seq,
            card: Some(card),
            n: Some(n),
        }
    }
    pub fn decline(seq: u64) -> Self {
        Self {
            seq,
            card: None,
            n: None,
        }
    }
}

impl std::fmt::Display for Ask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "ask #{} on {}", self.seq, self.pile)
    }
}

impl std::fmt::Display for Chosen {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.card, self.n) {
            (None, _) => write!(f, "#{} declines", self.seq),
            (Some(card), None) => write!(f, "#{} plays {}", self.seq, card),
            (Some(card), Some(n)) => write!(f, "#{} plays {} x{}", self.seq, card, n),
        }
    }
}
