use std::time::Duration;

pub const DEFAULT_AI_MOVE_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    /// Pause between the Player's move and the AI's reply.
    pub ai_move_delay: Duration,
}

impl TicTacToeSessionSettings {
    pub fn with_ai_move_delay_ms(ai_move_delay_ms: u64) -> Self {
        Self {
            ai_move_delay: Duration::from_millis(ai_move_delay_ms),
        }
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            ai_move_delay: DEFAULT_AI_MOVE_DELAY,
        }
    }
}
