use std::future::Future;

use super::tictactoe::{GameOverNotification, GameSnapshot};

/// Receives every state change a session publishes. Implemented by views.
pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: GameSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        notification: GameOverNotification,
    ) -> impl Future<Output = ()> + Send;
}
