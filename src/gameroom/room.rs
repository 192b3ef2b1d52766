use super::*;
use crate::engine::*;
use crate::gameplay::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;
use tokio::sync::mpsc::*;
use tokio::sync::watch;

/// Imperative shell around an [`Engine`].
///
/// Owns the engine outright, so every write to the game goes through this
/// one task in arrival order. Responsibilities:
/// - forward the engine's asks to the right actor via the registry
/// - feed actor replies and front-end inputs back into the engine
/// - pace cascade stages by the configured tempo
/// - publish a [`View`] after every step
///
/// Presentation inputs that arrive while a stage is being paced are
/// applied straight away; nothing else in the engine accepts them then.
pub struct Room {
    engine: Engine,
    tempo: Option<Tempo>,
    registry: Registry,
    replies: UnboundedReceiver<(Side, Chosen)>,
    inputs: UnboundedReceiver<Input>,
    views: watch::Sender<View>,
}

impl Room {
    /// Seat both adapters, deal, and mail the opening ask before the first
    /// view goes out. Nothing else happens until run.
    pub fn open(config: Config, human: Box<dyn Adapter>, bot: Box<dyn Adapter>) -> (Self, Handle) {
        let (reply_tx, replies) = unbounded_channel();
        let (input_tx, inputs) = unbounded_channel();
        let human = Actor::spawn(Side::Human, human, reply_tx.clone());
        let bot = Actor::spawn(Side::Bot, bot, reply_tx);
        let mut engine = Engine::new(config.seed);
        let registry = Registry::new(human.clone(), bot);
        for (side, ask) in engine.drain() {
            registry.unicast(side, Message::Ask(ask));
        }
        let (views, view_rx) = watch::channel(engine.view());
        let handle = Handle::new(input_tx, human, view_rx);
        let room = Self {
            engine,
            tempo: config.tempo,
            registry,
            replies,
            inputs,
            views,
        };
        (room, handle)
    }

    /// Human relay against a [`Lowball`] bot, running on its own task.
    pub fn spawn(config: Config) -> Handle {
        let bot = Bot::new(
            Box::new(Lowball),
            config.thinking,
            SmallRng::seed_from_u64(config.seed.wrapping_add(1)),
        );
        let (room, handle) = Self::open(config, Box::new(Human::default()), Box::new(bot));
        tokio::spawn(room.run());
        handle
    }

    pub async fn run(mut self) {
        log::info!("[room] open");
        self.flush();
        loop {
            tokio::select! {
                Some((side, chosen)) = self.replies.recv() => {
                    self.apply(Input::Chosen(side, chosen)).await
                }
                input = self.inputs.recv() => match input {
                    Some(input) => self.apply(input).await,
                    None => break,
                },
            }
        }
        log::info!("[room] closed");
    }
}

impl Room {
    async fn apply(&mut self, input: Input) {
        log::trace!("[room] {}", input);
        self.engine.handle(input);
        self.flush();
        self.resolve().await;
    }

    /// Step through the cascade, one stage per beat.
    async fn resolve(&mut self) {
        while let Some(stage) = self.engine.upcoming() {
            if let Some(tempo) = self.tempo {
                self.pause(tempo.beat(stage)).await;
            }
            self.engine.advance();
            self.flush();
        }
    }

    async fn pause(&mut self, beat: Duration) {
        let sleep = tokio::time::sleep(beat);
        tokio::pin!(sleep);
        loop {
            tokio::select! {
                _ = &mut sleep => break,
                Some(input) = self.inputs.recv() => {
                    log::trace!("[room] {} mid-cascade", input);
                    self.engine.handle(input);
                    self.publish();
                }
            }
        }
    }

    /// Send out pending asks, then publish.
    fn flush(&mut self) {
        for (side, ask) in self.engine.drain() {
            self.registry.unicast(side, Message::Ask(ask));
        }
        self.publish();
    }

    fn publish(&self) {
        self.views.send_replace(self.engine.view());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::*;

    /// Answer the human's next ask the way a lowball player would.
    async fn answer(handle: &mut Handle, answered: &mut u64) -> Option<View> {
        let last = *answered;
        let view = handle
            .until(|v| v.is_over() || v.awaiting_human().is_some_and(|seq| seq > last))
            .await?;
        if view.is_over() {
            return Some(view);
        }
        *answered = view.awaiting_human()?;
        let me = view.context.human();
        match view.phase {
            Phase::ChoosingFaceUp => handle.pick(Pick::Card {
                card: me.hand()[0],
                n: None,
            }),
            _ if me.active().is_blind() && me.total() > 0 => {
                let index = me.offhand().face_down().filled().next()?;
                handle.pick(Pick::Blind(index))
            }
            _ => match Lowball.choose(view.context.pile(), me) {
                Some(card) => handle.pick(Pick::Card { card, n: None }),
                None => handle.take_pile(),
            },
        }
        Some(view)
    }

    #[tokio::test]
    async fn setup_through_handle() {
        let mut handle = Room::spawn(Config::instant(1));
        let mut answered = 0;
        for _ in 0..3 {
            let view = answer(&mut handle, &mut answered).await.unwrap();
            assert!(view.is_setup());
        }
        let view = handle.until(|v| v.is_playing()).await.unwrap();
        assert!(view.context.human().offhand().face_up().is_full());
        assert_eq!(view.context.total(), 52);
    }

    #[tokio::test]
    async fn turns_alternate_and_conserve() {
        let mut handle = Room::spawn(Config::instant(2));
        let mut answered = 0;
        for _ in 0..60 {
            let view = answer(&mut handle, &mut answered).await.unwrap();
            assert_eq!(view.context.total(), 52);
            if view.is_over() {
                break;
            }
        }
    }

    #[tokio::test]
    async fn pick_from_first_view_lands() {
        let mut handle = Room::spawn(Config::instant(1));
        let view = handle.view();
        assert_eq!(view.awaiting_human(), Some(1));
        handle.pick(Pick::Card {
            card: view.context.human().hand()[0],
            n: None,
        });
        let view = tokio::time::timeout(
            Duration::from_secs(2),
            handle.until(|v| v.context.human().offhand().face_up().count() == 1),
        )
        .await
        .unwrap()
        .unwrap();
        assert!(view.is_setup());
    }

    #[tokio::test]
    async fn foreign_pick_is_asked_again() {
        let mut handle = Room::spawn(Config::instant(3));
        let view = handle.until(|v| v.awaiting_human().is_some()).await.unwrap();
        let stranger = view.context.bot().hand()[0];
        handle.pick(Pick::Card {
            card: stranger,
            n: None,
        });
        let view = handle
            .until(|v| v.awaiting_human() > view.awaiting_human())
            .await
            .unwrap();
        assert!(view.is_setup());
        assert!(view.context.human().offhand().face_up().is_empty());
    }

    #[tokio::test]
    async fn sort_hand_while_playing() {
        let mut handle = Room::spawn(Config::instant(4));
        let mut answered = 0;
        for _ in 0..3 {
            answer(&mut handle, &mut answered).await.unwrap();
        }
        handle.until(|v| v.is_playing()).await.unwrap();
        handle.sort_hand();
        let view = handle
            .until(|v| v.context.human().hand().is_sorted())
            .await
            .unwrap();
        let hand = view.context.human().hand().to_vec();
        let mut sorted = hand.clone();
        sorted.sort_by(rules::compare);
        assert_eq!(hand, sorted);
    }
}
