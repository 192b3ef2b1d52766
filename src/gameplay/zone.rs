/// The place a player plays from. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Zone {
    Hand,
    FaceUp,
    FaceDown,
}

impl Zone {
    /// Plays from here are made without seeing the card.
    pub fn is_blind(&self) -> bool {
        *self == Zone::FaceDown
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Zone::Hand => write!(f, "hand"),
            Zone::FaceUp => write!(f, "face-up"),
            Zone::FaceDown => write!(f, "face-down"),
        }
    }
}

/// Which of a player's zones a front end displays. No effect on rules.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Shown {
    #[default]
    Hand,
    OffHand,
}

impl Shown {
    pub fn toggled(self) -> Self {
        match self {
            Shown::Hand => Shown::OffHand,
            Shown::OffHand => Shown::Hand,
        }
    }
}

impl From<Zone> for Shown {
    fn from(zone: Zone) -> Self {
        match zone {
            Zone::Hand => Shown::Hand,
            Zone::FaceUp | Zone::FaceDown => Shown::OffHand,
        }
    }
}

impl std::fmt::Display for Shown {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Shown::Hand => write!(f, "hand"),
            Shown::OffHand => write!(f, "offhand"),
        }
    }
}
