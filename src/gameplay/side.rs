use enum_map::Enum;

/// Turn identifier: which seat acts.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Enum)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Bot,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Human => Side::Bot,
            Side::Bot => Side::Human,
        }
    }
    pub fn all() -> [Side; 2] {
        [Side::Human, Side::Bot]
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Side::Human => write!(f, "human"),
            Side::Bot => write!(f, "bot"),
        }
    }
}
