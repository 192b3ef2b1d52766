use crate::cards::*;
use crate::gameplay::*;

/// Why a proposed card was refused. Refusals are not fatal: the engine
/// logs them and asks again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotHeld { card: Card, zone: Zone },
    Unplayable { card: Card, top: Card },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotHeld { card, zone } => write!(f, "{} is not in the {}", card, zone),
            Self::Unplayable { card, top } => write!(f, "{} does not go on {}", card, top),
        }
    }
}

impl std::error::Error for Rejection {}

/// Check a proposed card against the mover's active zone and the pile.
/// Blind plays are taken on trust; the cascade sorts them out.
pub fn validate(card: Card, player: &Player, pile: &Pile) -> Result<Card, Rejection> {
    let zone = player.active();
    if !player.holds(card) {
        return Err(Rejection::NotHeld { card, zone });
    }
    match pile.top() {
        Some(top) if !zone.is_blind() && !pile.accepts(card) => {
            Err(Rejection::Unplayable { card, top })
        }
        _ => Ok(card),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        Card::parse(s).unwrap()
    }
    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }

    #[test]
    fn accepts_legal_hand_card() {
        let player = Player::new(cards("9c 4d"), OffHand::default());
        let pile = Pile::from(cards("8h"));
        assert_eq!(validate(card("9c"), &player, &pile), Ok(card("9c")));
    }

    #[test]
    fn rejects_card_outside_active_zone() {
        let face_up = Reserve::try_from(cards("Ah")).unwrap();
        let player = Player::new(cards("9c"), OffHand::new(face_up, Reserve::default()));
        let pile = Pile::default();
        assert_eq!(
            validate(card("Ah"), &player, &pile),
            Err(Rejection::NotHeld {
                card: card("Ah"),
                zone: Zone::Hand
            })
        );
    }

    #[test]
    fn rejects_low_card() {
        let player = Player::new(cards("4d"), OffHand::default());
        let pile = Pile::from(cards("8h"));
        let err = validate(card("4d"), &player, &pile).unwrap_err();
        assert_eq!(err.to_string(), "4d does not go on 8h");
    }

    #[test]
    fn blind_play_always_provisionally_legal() {
        let face_down = Reserve::try_from(cards("4d")).unwrap();
        let player = Player::new(vec![], OffHand::new(Reserve::default(), face_down));
        let pile = Pile::from(cards("Kh"));
        assert_eq!(validate(card("4d"), &player, &pile), Ok(card("4d")));
    }
}
