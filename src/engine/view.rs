use super::phase::Phase;
use crate::gameplay::*;

/// Read-only snapshot of the engine, published after every step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct View {
    pub phase: Phase,
    pub context: GameContext,
    /// Side and sequence number of the outstanding ask, if any.
    pub asking: Option<(Side, u64)>,
}

impl Default for View {
    fn default() -> Self {
        Self {
            phase: Phase::ChoosingFaceUp,
            context: GameContext::empty(),
            asking: None,
        }
    }
}

impl View {
    pub fn is_setup(&self) -> bool {
        self.phase.is_setup()
    }
    pub fn is_playing(&self) -> bool {
        self.phase.is_playing()
    }
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }
    pub fn is_won(&self) -> bool {
        self.phase.is_won()
    }
    pub fn is_lost(&self) -> bool {
        self.phase.is_lost()
    }
    /// Sequence number of the ask the human owes an answer to.
    pub fn awaiting_human(&self) -> Option<u64> {
        match self.asking {
            Some((Side::Human, seq)) => Some(seq),
            _ => None,
        }
    }
}
