use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::games::GameBroadcaster;
use crate::log;
use super::engine::{GameEngine, GameSnapshot};
use super::settings::TicTacToeSessionSettings;

struct PendingAiMove {
    generation: u64,
    handle: JoinHandle<()>,
}

/// Async front of a [`GameEngine`] for a view.
///
/// Player clicks are applied at once; the AI reply runs on a tokio task after
/// `ai_move_delay`. Starting a new game or unmounting aborts that task, and a
/// reply that still slips through is dropped by the engine's generation check.
#[derive(Clone)]
pub struct TicTacToeSession<B: GameBroadcaster> {
    engine: Arc<Mutex<GameEngine>>,
    pending_ai_move: Arc<Mutex<Option<PendingAiMove>>>,
    settings: TicTacToeSessionSettings,
    broadcaster: B,
}

impl<B: GameBroadcaster> TicTacToeSession<B> {
    pub fn new(settings: TicTacToeSessionSettings, broadcaster: B) -> Self {
        Self::with_engine(GameEngine::new(), settings, broadcaster)
    }

    pub fn with_engine(engine: GameEngine, settings: TicTacToeSessionSettings, broadcaster: B) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            pending_ai_move: Arc::new(Mutex::new(None)),
            settings,
            broadcaster,
        }
    }

    pub async fn mount(&self) {
        log!("Mounting session, AI move delay {:?}", self.settings.ai_move_delay);
        self.publish().await;
    }

    pub async fn unmount(&self) {
        self.cancel_pending_ai_move().await;
        log!("Session unmounted");
    }

    pub async fn on_cell_click(&self, index: usize) {
        let (accepted, ai_generation) = {
            let mut engine = self.engine.lock().await;
            let accepted = engine.apply_player_move(index);
            let ai_generation = engine.is_ai_turn().then(|| engine.generation());
            (accepted, ai_generation)
        };

        if !accepted {
            return;
        }

        self.publish().await;

        if let Some(generation) = ai_generation {
            self.schedule_ai_move(generation).await;
        }
    }

    pub async fn on_new_game_click(&self) {
        {
            let mut engine = self.engine.lock().await;
            engine.reset();
            log!("New game started, generation {}", engine.generation());
        }
        self.cancel_pending_ai_move().await;
        self.publish().await;
    }

    pub async fn get_state(&self) -> GameSnapshot {
        self.engine.lock().await.snapshot()
    }

    pub async fn has_pending_ai_move(&self) -> bool {
        self.pending_ai_move
            .lock()
            .await
            .as_ref()
            .is_some_and(|pending| !pending.handle.is_finished())
    }

    // The pending slot stays locked across the generation check.
    async fn schedule_ai_move(&self, generation: u64) {
        let mut pending = self.pending_ai_move.lock().await;
        if self.engine.lock().await.generation() != generation {
            log!("Skipped AI move for finished generation {}", generation);
            return;
        }

        let session = self.clone();
        let delay = self.settings.ai_move_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            session.run_ai_move(generation).await;
        });

        if let Some(previous) = pending.replace(PendingAiMove { generation, handle }) {
            previous.handle.abort();
        }
    }

    async fn run_ai_move(&self, generation: u64) {
        let applied = self.engine.lock().await.apply_ai_move_for(generation);
        if applied {
            self.publish().await;
        }
    }

    async fn cancel_pending_ai_move(&self) {
        if let Some(pending) = self.pending_ai_move.lock().await.take()
            && !pending.handle.is_finished()
        {
            pending.handle.abort();
            log!("Cancelled AI move scheduled in generation {}", pending.generation);
        }
    }

    async fn publish(&self) {
        let (snapshot, game_over) = {
            let engine = self.engine.lock().await;
            (engine.snapshot(), engine.game_over_notification())
        };

        self.broadcaster.broadcast_state(snapshot).await;

        if let Some(notification) = game_over {
            self.broadcaster.broadcast_game_over(notification).await;
        }
    }
}
