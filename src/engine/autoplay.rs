use super::engine::Engine;
use super::input::Input;
use super::phase::Phase;
use super::protocol::Chosen;
use crate::gameplay::*;
use crate::gameroom::Policy;

impl Engine {
    /// Play the game out between two policies with no pacing.
    ///
    /// During setup the human side reserves its first hand cards. Stops
    /// when the game ends or after `limit` replies, and returns the number
    /// of replies made.
    pub fn autoplay(&mut self, human: &mut dyn Policy, bot: &mut dyn Policy, limit: usize) -> usize {
        let mut replies = 0;
        while !self.phase().is_over() && replies < limit {
            self.settle();
            let asks = self.drain();
            if asks.is_empty() {
                break;
            }
            for (side, ask) in asks {
                let card = match (self.phase(), side) {
                    (Phase::ChoosingFaceUp, _) => ask.player.hand().first().copied(),
                    (_, Side::Human) => human.choose(&ask.pile, &ask.player),
                    (_, Side::Bot) => bot.choose(&ask.pile, &ask.player),
                };
                let chosen = Chosen {
                    seq: ask.seq,
                    card,
                    n: None,
                };
                self.handle(Input::Chosen(side, chosen));
                replies += 1;
            }
        }
        self.settle();
        replies
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameroom::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn self_play_conserves_cards() {
        for seed in 0..16 {
            let mut engine = Engine::new(seed);
            let replies = engine.autoplay(&mut Lowball, &mut Lowball, 2_000);
            assert!(replies <= 2_000);
            assert_eq!(engine.context().total(), 52);
        }
    }

    #[test]
    fn self_play_finishes_games() {
        let finished = (0..32)
            .map(|seed| {
                let mut engine = Engine::new(seed);
                engine.autoplay(&mut Lowball, &mut Lowball, 5_000);
                engine.phase().is_over()
            })
            .filter(|over| *over)
            .count();
        assert!(finished > 0);
    }

    #[test]
    fn random_play_keeps_invariants_every_step() {
        let mut human = Fish::new(SmallRng::seed_from_u64(1));
        let mut bot = Fish::new(SmallRng::seed_from_u64(2));
        let mut engine = Engine::new(5);
        let mut downs = [usize::MAX; 2];
        for _ in 0..1_000 {
            if engine.phase().is_over() {
                break;
            }
            engine.autoplay(&mut human, &mut bot, 1);
            let context = engine.context();
            assert_eq!(context.total(), 52);
            for (i, side) in Side::all().into_iter().enumerate() {
                let offhand = context.player(side).offhand();
                assert_eq!(offhand.face_up().slots().len(), crate::SLOTS);
                let count = offhand.face_down().count();
                assert!(count <= downs[i]);
                downs[i] = count;
            }
        }
    }
}
