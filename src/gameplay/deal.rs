use super::player::*;
use super::reserve::Reserve;
use crate::HAND_SIZE;
use crate::SLOTS;
use crate::cards::*;

/// Deal `players` seats from the top of `deck`: three face-down cards
/// each, then a hand of six. Returns what is left of the deck alongside
/// the seated players, in seating order.
pub fn deal(players: usize, mut deck: Deck) -> (Deck, Vec<Player>) {
    assert!(
        players * (SLOTS + HAND_SIZE) <= deck.len(),
        "deck of {} cannot seat {} players",
        deck.len(),
        players
    );
    let downs = (0..players)
        .map(|_| deck.deal(SLOTS))
        .map(|cards| Reserve::try_from(cards).unwrap_or_default())
        .collect::<Vec<_>>();
    let seated = downs
        .into_iter()
        .map(|down| Player::new(deck.deal(HAND_SIZE), OffHand::new(Reserve::default(), down)))
        .collect();
    (deck, seated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deals_two_seats() {
        let (deck, players) = deal(2, Deck::new());
        assert_eq!(players.len(), 2);
        assert_eq!(deck.len(), 52 - 2 * (SLOTS + HAND_SIZE));
        for player in players.iter() {
            assert_eq!(player.hand().len(), HAND_SIZE);
            assert!(player.offhand().face_down().is_full());
            assert!(player.offhand().face_up().is_empty());
        }
    }

    #[test]
    fn deals_without_duplication() {
        let (deck, players) = deal(2, Deck::new());
        let mut seen = Vec::from(deck);
        for mut player in players {
            seen.extend(player.drain());
        }
        assert_eq!(seen.len(), 52);
        assert_eq!(seen.into_iter().collect::<HashSet<_>>().len(), 52);
    }

    #[test]
    #[should_panic(expected = "cannot seat")]
    fn short_deck_panics() {
        deal(6, Deck::new());
    }
}
