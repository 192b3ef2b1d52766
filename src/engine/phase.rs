use super::cascade::Stage;

/// Top-level phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// The human is picking which hand cards go face up.
    ChoosingFaceUp,
    Playing(Step),
    Won,
    Lost,
}

/// Where the turn loop stands while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// An ask is out to whoever holds the turn.
    WaitForMove,
    /// A play landed and the cascade is part way through.
    /// `burned` records whether this cascade already cleared the pile.
    AfterPlay { next: Stage, burned: bool },
}

impl Phase {
    pub fn is_setup(&self) -> bool {
        matches!(self, Phase::ChoosingFaceUp)
    }
    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing(_))
    }
    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }
    pub fn is_won(&self) -> bool {
        matches!(self, Phase::Won)
    }
    pub fn is_lost(&self) -> bool {
        matches!(self, Phase::Lost)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Phase::ChoosingFaceUp => write!(f, "choosing face-up cards"),
            Phase::Playing(Step::WaitForMove) => write!(f, "playing"),
            Phase::Playing(Step::AfterPlay { next, .. }) => write!(f, "resolving {}", next),
            Phase::Won => write!(f, "won"),
            Phase::Lost => write!(f, "lost"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projections_partition() {
        let phases = [
            Phase::ChoosingFaceUp,
            Phase::Playing(Step::WaitForMove),
            Phase::Won,
            Phase::Lost,
        ];
        for phase in phases {
            let hits = [phase.is_setup(), phase.is_playing(), phase.is_over()]
                .into_iter()
                .filter(|b| *b)
                .count();
            assert_eq!(hits, 1);
        }
        assert!(Phase::Won.is_won() && !Phase::Won.is_lost());
        assert!(Phase::Lost.is_lost() && !Phase::Lost.is_won());
    }
}
