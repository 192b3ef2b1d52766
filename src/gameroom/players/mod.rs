pub mod bot;
pub use bot::*;

pub mod human;
pub use human::*;
