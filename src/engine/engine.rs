use super::cascade::*;
use super::input::Input;
use super::phase::*;
use super::protocol::*;
use super::rejection::validate;
use super::view::View;
use crate::gameplay::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Authoritative state machine for one table.
///
/// Owns the only live [`GameContext`]. Everything outside talks to it
/// through [`Engine::handle`] and reads [`View`] snapshots back. Asks for
/// the side holding the turn pile up in an outbox until drained.
///
/// The engine never sleeps. After a play it parks in
/// [`Step::AfterPlay`] and each call to [`Engine::advance`] evaluates one
/// cascade stage, so a caller may pace stages however it likes or
/// [`Engine::settle`] them all at once.
#[derive(Debug)]
pub struct Engine {
    rng: SmallRng,
    phase: Phase,
    context: GameContext,
    seq: u64,
    pending: Option<(Side, u64)>,
    outbox: Vec<(Side, Ask)>,
}

impl Engine {
    /// Shuffle and deal from `seed`, then ask the human for face-up cards.
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let context = GameContext::new(&mut rng);
        let mut engine = Self::assemble(rng, context);
        engine.start();
        engine
    }
    /// Resume from an exact context, already playing, whoever holds the
    /// turn to move. `seed` only feeds later new games.
    pub fn with_context(context: GameContext, seed: u64) -> Self {
        let mut engine = Self::assemble(SmallRng::seed_from_u64(seed), context);
        engine.wait();
        engine
    }
    fn assemble(rng: SmallRng, context: GameContext) -> Self {
        Self {
            rng,
            context,
            phase: Phase::ChoosingFaceUp,
            seq: 0,
            pending: None,
            outbox: Vec::new(),
        }
    }
}

impl Engine {
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn context(&self) -> &GameContext {
        &self.context
    }
    pub fn pending(&self) -> Option<(Side, u64)> {
        self.pending
    }
    /// The cascade stage evaluated by the next [`Engine::advance`].
    pub fn upcoming(&self) -> Option<Stage> {
        match self.phase {
            Phase::Playing(Step::AfterPlay { next, .. }) => Some(next),
            _ => None,
        }
    }
    pub fn view(&self) -> View {
        View {
            phase: self.phase,
            context: self.context.clone(),
            asking: self.pending,
        }
    }
    /// Take the asks issued since the last drain, oldest first.
    pub fn drain(&mut self) -> Vec<(Side, Ask)> {
        std::mem::take(&mut self.outbox)
    }
}

impl Engine {
    /// Apply one input. Inputs that make no sense in the current phase,
    /// and replies to anything but the outstanding ask, are dropped.
    pub fn handle(&mut self, input: Input) {
        match (self.phase, input) {
            (_, Input::Chosen(side, chosen)) if self.pending != Some((side, chosen.seq)) => {
                log::debug!("[engine] dropping stale reply {} from {}", chosen, side)
            }
            (Phase::ChoosingFaceUp, Input::Chosen(_, chosen)) => self.reserve(chosen),
            (Phase::Playing(Step::WaitForMove), Input::Chosen(_, chosen)) => self.respond(chosen),
            (Phase::Playing(Step::WaitForMove), Input::TakePile) if self.may_take() => {
                self.surrender()
            }
            (Phase::Playing(_), Input::SetShown(side, shown)) => {
                self.context.set_shown(side, shown)
            }
            (Phase::Playing(_), Input::SortHand) => self.context.sort_hand(),
            (Phase::Won | Phase::Lost, Input::NewGame) => self.restart(),
            (phase, input) => log::debug!("[engine] ignoring {} while {}", input, phase),
        }
    }

    /// Evaluate one cascade stage. Returns the stage evaluated, or `None`
    /// when no play is being resolved.
    pub fn advance(&mut self) -> Option<Stage> {
        let Phase::Playing(Step::AfterPlay { next, burned }) = self.phase else {
            return None;
        };
        let rule = next.rule();
        let fired = (rule.guard)(&self.context);
        if fired {
            log::debug!("[engine] {}", next);
            (rule.effect)(&mut self.context, burned);
        }
        let burned = burned || (fired && next == Stage::Burn);
        match (fired, rule.exit, next.next()) {
            (true, Some(exit), _) => self.leave(exit),
            (_, _, Some(following)) => {
                self.phase = Phase::Playing(Step::AfterPlay {
                    next: following,
                    burned,
                })
            }
            (_, _, None) => self.leave(Exit::Wait),
        }
        Some(next)
    }

    /// Run the rest of the cascade without pausing.
    pub fn settle(&mut self) {
        while self.advance().is_some() {}
    }
}

impl Engine {
    fn start(&mut self) {
        log::info!("[engine] dealt a new game");
        if self.context.has_reserved() {
            self.wait();
        } else {
            self.ask(Side::Human);
        }
    }

    fn restart(&mut self) {
        log::info!("[engine] new game requested");
        self.context.drain();
        self.context = GameContext::new(&mut self.rng);
        self.phase = Phase::ChoosingFaceUp;
        self.pending = None;
        self.outbox.clear();
        self.start();
    }

    fn wait(&mut self) {
        if !self.phase.is_playing() {
            log::info!("[engine] playing");
        }
        self.phase = Phase::Playing(Step::WaitForMove);
        self.context.refresh_all();
        self.ask(self.context.turn());
    }

    fn ask(&mut self, side: Side) {
        self.seq += 1;
        self.pending = Some((side, self.seq));
        let ask = Ask {
            seq: self.seq,
            pile: self.context.pile().clone(),
            player: self.context.player(side).clone(),
        };
        log::debug!("[engine] {} to {}", ask, side);
        self.outbox.push((side, ask));
    }

    /// Setup: move the chosen hand card face up, then ask again or start.
    fn reserve(&mut self, chosen: Chosen) {
        self.pending = None;
        match chosen.card {
            Some(card) if self.context.reserve(card) => {
                log::debug!("[engine] human puts {} face up", card)
            }
            _ => log::debug!("[engine] {} is not a face-up choice", chosen),
        }
        if self.context.has_reserved() {
            self.wait();
        } else {
            self.ask(Side::Human);
        }
    }

    fn respond(&mut self, chosen: Chosen) {
        self.pending = None;
        let side = self.context.turn();
        let Some(card) = chosen.card else {
            log::debug!("[engine] {} cannot play and takes the pile", side);
            self.context.take_pile();
            self.context.refresh_shown(side);
            self.context.switch_turns();
            return self.wait();
        };
        match validate(card, self.context.current(), self.context.pile()) {
            Err(rejection) => {
                log::debug!("[engine] {} rejected: {}", side, rejection);
                self.ask(side);
            }
            Ok(card) => {
                let played = self.context.play(card, chosen.n);
                log::debug!("[engine] {} plays {:?}", side, played);
                self.phase = Phase::Playing(Step::AfterPlay {
                    next: Stage::FIRST,
                    burned: false,
                });
            }
        }
    }

    fn may_take(&self) -> bool {
        self.context.turn() == Side::Human && self.context.bot().total() > 0
    }

    fn surrender(&mut self) {
        self.pending = None;
        log::debug!("[engine] human takes the pile");
        self.context.take_pile();
        self.context.set_shown(Side::Human, Shown::Hand);
        self.context.switch_turns();
        self.wait();
    }

    /// Leave the cascade, refreshing what each side displays.
    fn leave(&mut self, exit: Exit) {
        self.context.refresh_all();
        match exit {
            Exit::Won => {
                log::info!("[engine] human wins");
                self.phase = Phase::Won;
            }
            Exit::Lost => {
                log::info!("[engine] bot wins");
                self.phase = Phase::Lost;
            }
            Exit::Wait => self.wait(),
        }
    }
}
