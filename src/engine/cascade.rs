//! Post-play resolution cascade.
//!
//! After every play the stages below are checked in order. A stage whose
//! guard holds applies its effect; if it also names an exit, the cascade
//! ends there. Otherwise evaluation continues with the next stage.
use crate::gameplay::*;

/// One row of the cascade, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Stage {
    /// Clear a burnable pile.
    Burn,
    /// Human out of cards on a settled pile.
    Win,
    /// Bot out of cards.
    Loss,
    /// Mover still plays from a zone it can see.
    Sighted,
    /// Human's blind card did not beat the pile.
    HumanMiss,
    /// Bot's blind card did not beat the pile.
    BotMiss,
    /// Blind play that stood.
    Blind,
}

/// Where a firing stage sends the turn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Won,
    Lost,
    Wait,
}

/// Guard, effect, and optional exit for one stage.
#[derive(Clone, Copy)]
pub struct Rule {
    pub stage: Stage,
    pub guard: fn(&GameContext) -> bool,
    pub effect: fn(&mut GameContext, bool),
    pub exit: Option<Exit>,
}

static RULES: [Rule; 7] = [
    Rule {
        stage: Stage::Burn,
        guard: |ctx| ctx.pile().is_burnable(),
        effect: |ctx, _| ctx.burn(),
        exit: None,
    },
    Rule {
        stage: Stage::Win,
        guard: |ctx| ctx.pile().is_settled() && ctx.human().is_out(),
        effect: |_, _| {},
        exit: Some(Exit::Won),
    },
    Rule {
        stage: Stage::Loss,
        guard: |ctx| ctx.bot().is_out(),
        effect: |_, _| {},
        exit: Some(Exit::Lost),
    },
    Rule {
        stage: Stage::Sighted,
        guard: |ctx| !ctx.current().active().is_blind(),
        effect: pass,
        exit: Some(Exit::Wait),
    },
    Rule {
        stage: Stage::HumanMiss,
        guard: |ctx| ctx.turn() == Side::Human && missed(ctx),
        effect: |ctx, _| ctx.switch_turns(),
        exit: Some(Exit::Wait),
    },
    Rule {
        stage: Stage::BotMiss,
        guard: |ctx| ctx.turn() == Side::Bot && missed(ctx),
        effect: |ctx, _| {
            ctx.take_pile();
            ctx.switch_turns();
        },
        exit: Some(Exit::Wait),
    },
    Rule {
        stage: Stage::Blind,
        guard: |_| true,
        effect: pass,
        exit: Some(Exit::Wait),
    },
];

/// Pass the turn unless this cascade burned the pile.
fn pass(ctx: &mut GameContext, burned: bool) {
    if !burned {
        ctx.switch_turns();
    }
}

fn missed(ctx: &GameContext) -> bool {
    !ctx.pile().is_empty() && !ctx.pile().is_settled()
}

impl Stage {
    pub const FIRST: Stage = Stage::Burn;

    pub fn rule(&self) -> &'static Rule {
        &RULES[*self as usize]
    }
    pub fn next(&self) -> Option<Stage> {
        RULES.get(*self as usize + 1).map(|r| r.stage)
    }
    pub fn all() -> impl Iterator<Item = Stage> {
        RULES.iter().map(|r| r.stage)
    }
}

/// The first stage whose guard holds against `ctx`, without applying
/// any effect.
pub fn select(ctx: &GameContext) -> Stage {
    Stage::all()
        .find(|s| (s.rule().guard)(ctx))
        .unwrap_or(Stage::Blind)
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Stage::Burn => write!(f, "burn"),
            Stage::Win => write!(f, "win"),
            Stage::Loss => write!(f, "loss"),
            Stage::Sighted => write!(f, "sighted pass"),
            Stage::HumanMiss => write!(f, "human miss"),
            Stage::BotMiss => write!(f, "bot miss"),
            Stage::Blind => write!(f, "blind pass"),
        }
    }
}
