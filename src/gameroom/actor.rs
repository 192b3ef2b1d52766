use super::adapter::Adapter;
use super::message::Message;
use crate::engine::Chosen;
use crate::gameplay::Side;
use tokio::sync::mpsc::*;

/// Runs an adapter in its own task.
///
/// - Room unicasts Ask when the adapter's side holds the turn
/// - Front ends send Choose into the human's mailbox
/// - Every reply goes back to the room tagged with the actor's side
pub struct Actor {
    side: Side,
    adapter: Box<dyn Adapter>,
    getter: UnboundedReceiver<Message>,
    sender: UnboundedSender<(Side, Chosen)>,
}

impl Actor {
    pub fn spawn(
        side: Side,
        adapter: Box<dyn Adapter>,
        sender: UnboundedSender<(Side, Chosen)>,
    ) -> UnboundedSender<Message> {
        let (tx, rx) = unbounded_channel();
        let actor = Self {
            side,
            adapter,
            sender,
            getter: rx,
        };
        tokio::spawn(actor.run());
        tx
    }
    async fn run(mut self) {
        while let Some(message) = self.getter.recv().await {
            log::trace!("[actor {}] received {}", self.side, message);
            if let Some(chosen) = self.adapter.receive(message).await {
                log::debug!("[actor {}] replied {}", self.side, chosen);
                if self.sender.send((self.side, chosen)).is_err() {
                    log::warn!("[actor {}] room is gone", self.side);
                    break;
                }
            }
        }
        log::trace!("[actor {}] stopped", self.side);
    }
}
