use tictactoe_common::games::GameBroadcaster;
use tictactoe_common::games::tictactoe::{GameOverNotification, GameSnapshot};
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    State(GameSnapshot),
    GameOver(GameOverNotification),
}

/// Forwards session updates to the terminal loop.
#[derive(Clone)]
pub struct LocalBroadcaster {
    event_tx: mpsc::UnboundedSender<ViewEvent>,
}

impl LocalBroadcaster {
    pub fn new(event_tx: mpsc::UnboundedSender<ViewEvent>) -> Self {
        Self { event_tx }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: GameSnapshot) {
        let _ = self.event_tx.send(ViewEvent::State(snapshot));
    }

    async fn broadcast_game_over(&self, notification: GameOverNotification) {
        let _ = self.event_tx.send(ViewEvent::GameOver(notification));
    }
}
