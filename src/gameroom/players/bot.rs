use crate::engine::*;
use crate::gameroom::*;
use rand::rngs::SmallRng;

/// Where the automated seat is in answering an ask.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    #[default]
    Idle,
    Thinking,
    Choosing,
}

/// Automated seat. On an ask it waits out a random thinking delay, lets
/// its policy choose, answers, and goes back to idle for the next turn.
pub struct Bot {
    policy: Box<dyn Policy>,
    thinking: Thinking,
    rng: SmallRng,
    mood: Mood,
}

impl Bot {
    pub fn new(policy: Box<dyn Policy>, thinking: Thinking, rng: SmallRng) -> Self {
        Self {
            policy,
            thinking,
            rng,
            mood: Mood::Idle,
        }
    }
    pub fn mood(&self) -> Mood {
        self.mood
    }
}

#[async_trait::async_trait]
impl Adapter for Bot {
    async fn receive(&mut self, message: Message) -> Option<Chosen> {
        let ask = match message {
            Message::Ask(ask) => ask,
            Message::Choose(pick) => {
                log::debug!("[bot] ignoring pick {}", pick);
                return None;
            }
        };
        self.mood = Mood::Thinking;
        let delay = self.thinking.sample(&mut self.rng);
        log::trace!("[bot] thinking for {:?}", delay);
        tokio::time::sleep(delay).await;
        self.mood = Mood::Choosing;
        let card = self.policy.choose(&ask.pile, &ask.player);
        self.mood = Mood::Idle;
        Some(Chosen {
            seq: ask.seq,
            card,
            n: None,
        })
    }
}
