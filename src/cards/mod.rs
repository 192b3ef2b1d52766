pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod pile;
pub use pile::*;

pub mod rank;
pub use rank::*;

pub mod rules;

pub mod suit;
pub use suit::*;
