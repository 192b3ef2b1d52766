use crate::engine::*;
use crate::gameroom::*;

/// Passive relay for a person. Holds the latest ask until a front end
/// sends a pick for it, then answers and goes idle.
#[derive(Debug, Default)]
pub enum Human {
    #[default]
    Idle,
    Waiting(Ask),
}

impl Human {
    pub fn is_waiting(&self) -> bool {
        matches!(self, Human::Waiting(_))
    }
}

#[async_trait::async_trait]
impl Adapter for Human {
    async fn receive(&mut self, message: Message) -> Option<Chosen> {
        match (std::mem::take(self), message) {
            (_, Message::Ask(ask)) => {
                log::debug!("[human] waiting on {}", ask);
                *self = Human::Waiting(ask);
                None
            }
            (Human::Waiting(ask), Message::Choose(pick)) => match pick.resolve(&ask) {
                Some(chosen) => Some(chosen),
                None => {
                    log::debug!("[human] {} holds nothing", pick);
                    *self = Human::Waiting(ask);
                    None
                }
            },
            (Human::Idle, Message::Choose(pick)) => {
                log::debug!("[human] ignoring {} while idle", pick);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::*;
    use crate::gameplay::*;

    fn card(s: &str) -> Card {
        Card::try_from(s).unwrap()
    }
    fn ask(seq: u64) -> Ask {
        Ask {
            seq,
            pile: Pile::default(),
            player: Player::new(vec![card("9c")], OffHand::default()),
        }
    }
    fn pick(s: &str) -> Message {
        Message::Choose(Pick::Card {
            card: card(s),
            n: None,
        })
    }

    #[tokio::test]
    async fn idle_ignores_picks() {
        let mut human = Human::default();
        assert_eq!(human.receive(pick("9c")).await, None);
        assert!(!human.is_waiting());
    }

    #[tokio::test]
    async fn answers_once_then_idles() {
        let mut human = Human::default();
        assert_eq!(human.receive(Message::Ask(ask(4))).await, None);
        assert!(human.is_waiting());
        assert_eq!(human.receive(pick("9c")).await, Some(Chosen::card(4, card("9c"))));
        assert!(!human.is_waiting());
        assert_eq!(human.receive(pick("9c")).await, None);
    }

    #[tokio::test]
    async fn newer_ask_replaces_older() {
        let mut human = Human::default();
        human.receive(Message::Ask(ask(1))).await;
        human.receive(Message::Ask(ask(2))).await;
        assert_eq!(human.receive(pick("9c")).await, Some(Chosen::card(2, card("9c"))));
    }

    #[tokio::test]
    async fn empty_blind_position_keeps_waiting() {
        let mut human = Human::default();
        human.receive(Message::Ask(ask(1))).await;
        assert_eq!(human.receive(Message::Choose(Pick::Blind(0))).await, None);
        assert!(human.is_waiting());
    }
}
