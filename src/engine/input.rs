use super::protocol::Chosen;
use crate::gameplay::*;

/// Everything the engine accepts from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// An adapter answered an ask. During setup this picks a face-up card.
    Chosen(Side, Chosen),
    /// The human gives up and picks up the pile.
    TakePile,
    SetShown(Side, Shown),
    SortHand,
    NewGame,
}

impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Input::Chosen(side, chosen) => write!(f, "{} {}", side, chosen),
            Input::TakePile => write!(f, "take pile"),
            Input::SetShown(side, shown) => write!(f, "show {} {}", side, shown),
            Input::SortHand => write!(f, "sort hand"),
            Input::NewGame => write!(f, "new game"),
        }
    }
}
