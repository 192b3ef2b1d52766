//! Terminal front end.
pub mod args;
pub use args::*;

pub mod render;

pub mod terminal;
pub use terminal::*;
