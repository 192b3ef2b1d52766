use super::message::Message;
use crate::engine::Chosen;

/// Uniform contract for anything that answers the engine's asks.
///
/// The room does not care whether a reply comes from a person at a
/// terminal or from a policy running behind a timer. Adapters only see
/// messages and only answer with a [`Chosen`]; they never touch the game
/// state themselves.
#[async_trait::async_trait]
pub trait Adapter: Send {
    /// Handle one mailbox message, returning a reply once there is one.
    async fn receive(&mut self, message: Message) -> Option<Chosen>;
}
