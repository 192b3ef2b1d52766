mod actor;
mod adapter;
mod handle;
mod message;
mod players;
mod policy;
mod registry;
mod room;
mod timer;

pub use actor::*;
pub use adapter::*;
pub use handle::*;
pub use message::*;
pub use players::*;
pub use policy::*;
pub use registry::*;
pub use room::*;
pub use timer::*;
