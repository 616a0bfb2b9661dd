mod board;
mod bot_controller;
mod engine;
mod game_state;
mod score_board;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves, is_board_full};
pub use bot_controller::{WIN_SCORE, get_best_move, minimax};
pub use engine::{GameEngine, GameOverNotification, GameSnapshot};
pub use game_state::TicTacToeGameState;
pub use score_board::ScoreBoard;
pub use session::TicTacToeSession;
pub use settings::{DEFAULT_AI_MOVE_DELAY, TicTacToeSessionSettings};
pub use types::{BOARD_SIZE, CELL_COUNT, GameOutcome, GameStatus, Mark, Side, WinningLine};
pub use win_detector::{LINES, check_winner, check_winner_with_line};
