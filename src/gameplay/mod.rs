pub mod context;
pub use context::*;

pub mod deal;
pub use deal::*;

pub mod player;
pub use player::*;

pub mod reserve;
pub use reserve::*;

pub mod side;
pub use side::*;

pub mod zone;
pub use zone::*;
