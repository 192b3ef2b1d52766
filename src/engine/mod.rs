pub mod autoplay;

pub mod cascade;
pub use cascade::*;

pub mod engine;
pub use engine::*;

pub mod input;
pub use input::*;

pub mod phase;
pub use phase::*;

pub mod protocol;
pub use protocol::*;

pub mod rejection;
pub use rejection::*;

pub mod view;
pub use view::*;
