use super::board::{Board, is_board_full};
use super::types::{CELL_COUNT, GameOutcome, GameStatus, Side};
use super::win_detector::check_winner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub turn: Side,
    pub outcome: GameOutcome,
    pub last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Side::Player,
            outcome: GameOutcome::InProgress,
            last_move: None,
        }
    }

    /// Rebuilds a state from an arbitrary board, deriving the outcome from it.
    pub fn from_board(board: Board, turn: Side) -> Self {
        let mut state = Self {
            board,
            turn,
            outcome: GameOutcome::InProgress,
            last_move: None,
        };
        state.check_game_over();
        state
    }

    pub fn status(&self) -> GameStatus {
        match (self.outcome, self.turn) {
            (GameOutcome::InProgress, Side::Player) => GameStatus::PlayerTurn,
            (GameOutcome::InProgress, Side::Ai) => GameStatus::AiTurn,
            (outcome, _) => GameStatus::GameOver(outcome),
        }
    }

    /// Places `side`'s mark at `index`, then settles the outcome or passes the turn.
    pub fn place_mark(&mut self, side: Side, index: usize) -> Result<GameOutcome, String> {
        if self.outcome != GameOutcome::InProgress {
            return Err("Game is already over".to_string());
        }

        if side != self.turn {
            return Err(format!("Not {}'s turn", side));
        }

        if index >= CELL_COUNT {
            return Err(format!("Cell {} is out of bounds", index));
        }

        if !self.board.is_empty_cell(index) {
            return Err(format!("Cell {} is already marked", index));
        }

        self.board.set(index, side.mark());
        self.last_move = Some(index);

        self.check_game_over();

        if self.outcome == GameOutcome::InProgress {
            self.turn = self.turn.opponent();
        }

        Ok(self.outcome)
    }

    fn check_game_over(&mut self) {
        if let Some(winner) = check_winner(&self.board) {
            self.outcome = GameOutcome::Win(winner);
            return;
        }

        if is_board_full(&self.board) {
            self.outcome = GameOutcome::Draw;
        }
    }
}
