use super::message::Message;
use crate::gameplay::Side;
use enum_map::EnumMap;
use tokio::sync::mpsc::UnboundedSender;

/// Mailbox of each side's actor, looked up when a message goes out.
#[derive(Debug)]
pub struct Registry(EnumMap<Side, UnboundedSender<Message>>);

impl Registry {
    pub fn new(human: UnboundedSender<Message>, bot: UnboundedSender<Message>) -> Self {
        Self(EnumMap::from_array([human, bot]))
    }
    pub fn mailbox(&self, side: Side) -> &UnboundedSender<Message> {
        &self.0[side]
    }
    pub fn unicast(&self, side: Side, message: Message) {
        self.0[side]
            .send(message)
            .err()
            .inspect(|e| log::warn!("[room] failed unicast to {}: {:?}", side, e));
    }
}
