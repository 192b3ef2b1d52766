use super::message::*;
use crate::engine::*;
use crate::gameplay::*;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::watch;

/// What a front end holds on to a running room.
///
/// Inputs go in through the methods below; state comes back as [`View`]
/// snapshots. The room closes once every handle is dropped.
#[derive(Debug, Clone)]
pub struct Handle {
    inputs: UnboundedSender<Input>,
    human: UnboundedSender<Message>,
    views: watch::Receiver<View>,
}

impl Handle {
    pub fn new(
        inputs: UnboundedSender<Input>,
        human: UnboundedSender<Message>,
        views: watch::Receiver<View>,
    ) -> Self {
        Self {
            inputs,
            human,
            views,
        }
    }

    /// Pick for the human. Only lands if the human is being asked.
    pub fn pick(&self, pick: Pick) {
        if let Err(e) = self.human.send(Message::Choose(pick)) {
            log::warn!("[handle] human mailbox closed: {:?}", e);
        }
    }
    pub fn take_pile(&self) {
        self.input(Input::TakePile);
    }
    pub fn show(&self, side: Side, shown: Shown) {
        self.input(Input::SetShown(side, shown));
    }
    pub fn sort_hand(&self) {
        self.input(Input::SortHand);
    }
    pub fn new_game(&self) {
        self.input(Input::NewGame);
    }
    fn input(&self, input: Input) {
        if let Err(e) = self.inputs.send(input) {
            log::warn!("[handle] room closed: {:?}", e);
        }
    }
}

impl Handle {
    /// Latest snapshot.
    pub fn view(&self) -> View {
        self.views.borrow().clone()
    }
    /// Wait for the next snapshot. `None` once the room is gone.
    pub async fn changed(&mut self) -> Option<View> {
        self.views
            .changed()
            .await
            .ok()
            .map(|_| self.views.borrow_and_update().clone())
    }
    /// Wait for a snapshot satisfying `f`. `None` once the room is gone.
    pub async fn until<F>(&mut self, f: F) -> Option<View>
    where
        F: FnMut(&View) -> bool,
    {
        self.views.wait_for(f).await.ok().map(|view| view.clone())
    }
}
