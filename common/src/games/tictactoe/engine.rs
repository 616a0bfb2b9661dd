use crate::log;
use super::board::Board;
use super::bot_controller::get_best_move;
use super::game_state::TicTacToeGameState;
use super::score_board::ScoreBoard;
use super::types::{GameOutcome, GameStatus, Side, WinningLine};
use super::win_detector::check_winner_with_line;

/// Read-only copy of everything a view needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub turn: Side,
    pub outcome: GameOutcome,
    pub scores: ScoreBoard,
    pub last_move: Option<usize>,
}

impl GameSnapshot {
    pub fn status(&self) -> GameStatus {
        match (self.outcome, self.turn) {
            (GameOutcome::InProgress, Side::Player) => GameStatus::PlayerTurn,
            (GameOutcome::InProgress, Side::Ai) => GameStatus::AiTurn,
            (outcome, _) => GameStatus::GameOver(outcome),
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_winner_with_line(&self.board)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverNotification {
    pub outcome: GameOutcome,
    pub winning_line: Option<WinningLine>,
    pub scores: ScoreBoard,
}

/// Owns the board, turn order, scoring and the AI opponent.
///
/// Out-of-contract calls (occupied cell, wrong turn, finished game) leave the
/// engine untouched and return `false`. Every `reset` starts a new generation;
/// deferred AI moves carry the generation they were scheduled in.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: TicTacToeGameState,
    scores: ScoreBoard,
    generation: u64,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_board(board: Board, turn: Side) -> Self {
        Self {
            state: TicTacToeGameState::from_board(board, turn),
            scores: ScoreBoard::new(),
            generation: 0,
        }
    }

    pub fn apply_player_move(&mut self, index: usize) -> bool {
        self.place(Side::Player, index)
    }

    pub fn apply_ai_move(&mut self) -> bool {
        if self.state.status() != GameStatus::AiTurn {
            log!("Ignored AI move: status is {:?}", self.state.status());
            return false;
        }

        let Some(index) = get_best_move(&self.state.board) else {
            log!("Ignored AI move: no empty cell left");
            return false;
        };

        self.place(Side::Ai, index)
    }

    pub fn apply_ai_move_for(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            log!(
                "Discarded AI move scheduled in generation {} (current {})",
                generation,
                self.generation
            );
            return false;
        }
        self.apply_ai_move()
    }

    pub fn reset(&mut self) {
        self.state = TicTacToeGameState::new();
        self.generation += 1;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.state.board,
            turn: self.state.turn,
            outcome: self.state.outcome,
            scores: self.scores,
            last_move: self.state.last_move,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn is_ai_turn(&self) -> bool {
        self.state.status() == GameStatus::AiTurn
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn game_over_notification(&self) -> Option<GameOverNotification> {
        if !self.state.outcome.is_over() {
            return None;
        }
        Some(GameOverNotification {
            outcome: self.state.outcome,
            winning_line: check_winner_with_line(&self.state.board),
            scores: self.scores,
        })
    }

    fn place(&mut self, side: Side, index: usize) -> bool {
        match self.state.place_mark(side, index) {
            Ok(outcome) => {
                if outcome.is_over() {
                    self.scores.record(outcome);
                    log!("Game over after {} took cell {}: {:?}", side, index, outcome);
                }
                true
            }
            Err(e) => {
                log!("Ignored {} move at cell {}: {}", side, index, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::is_board_full;
    use crate::games::tictactoe::types::Mark;
    use crate::games::tictactoe::win_detector::check_winner;

    fn parse(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_player_move_hands_turn_to_ai() {
        let mut engine = GameEngine::new();

        assert!(engine.apply_player_move(0));

        assert_eq!(engine.status(), GameStatus::AiTurn);
        assert_eq!(engine.board().get(0), Some(Mark::X));
    }

    #[test]
    fn test_ai_reply_to_first_move() {
        let mut engine = GameEngine::new();
        engine.apply_player_move(0);

        assert!(engine.apply_ai_move());

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.board.count(Mark::O), 1);
        assert_eq!(snapshot.board.get(0), Some(Mark::X));
        assert_ne!(snapshot.last_move, Some(0));
        assert_eq!(snapshot.last_move, Some(4));
        assert_eq!(snapshot.turn, Side::Player);
        assert_eq!(snapshot.status(), GameStatus::PlayerTurn);
    }

    #[test]
    fn test_ai_move_on_player_turn_is_noop() {
        let mut engine = GameEngine::new();

        assert!(!engine.apply_ai_move());
        assert_eq!(engine.snapshot(), GameEngine::new().snapshot());
    }

    #[test]
    fn test_player_move_during_ai_turn_is_noop() {
        let mut engine = GameEngine::new();
        engine.apply_player_move(0);
        let before = engine.snapshot();

        assert!(!engine.apply_player_move(1));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_occupied_and_out_of_range_cells_are_noops() {
        let mut engine = GameEngine::new();
        engine.apply_player_move(0);
        engine.apply_ai_move();
        let before = engine.snapshot();

        assert!(!engine.apply_player_move(0));
        assert!(!engine.apply_player_move(4));
        assert!(!engine.apply_player_move(42));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_move_after_player_won_is_noop() {
        let board = parse("XXX/OO./...");
        assert_eq!(check_winner(&board), Some(Side::Player));

        let mut engine = GameEngine::from_board(board, Side::Player);
        let before = engine.snapshot();

        assert_eq!(before.outcome, GameOutcome::Win(Side::Player));
        assert!(!engine.apply_player_move(5));
        assert!(!engine.apply_ai_move());
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = parse("XOX/XOO/OXX");

        let engine = GameEngine::from_board(board, Side::Player);

        assert_eq!(check_winner(&board), None);
        assert!(is_board_full(&board));
        assert_eq!(engine.status(), GameStatus::GameOver(GameOutcome::Draw));
    }

    #[test]
    fn test_player_win_is_scored_once() {
        let mut engine = GameEngine::from_board(parse("XX./OO./..."), Side::Player);

        assert!(engine.apply_player_move(2));
        assert!(!engine.apply_player_move(5));

        assert_eq!(engine.scores().player_wins, 1);
        assert_eq!(engine.scores().games_played(), 1);
        let notification = engine.game_over_notification().unwrap();
        assert_eq!(notification.outcome, GameOutcome::Win(Side::Player));
        assert_eq!(notification.winning_line.map(|l| l.cells), Some([0, 1, 2]));
    }

    #[test]
    fn test_ai_win_is_scored() {
        let mut engine = GameEngine::from_board(parse("OO./XX./X.."), Side::Ai);

        assert!(engine.apply_ai_move());

        assert_eq!(engine.board().get(2), Some(Mark::O));
        assert_eq!(engine.status(), GameStatus::GameOver(GameOutcome::Win(Side::Ai)));
        assert_eq!(engine.scores().ai_wins, 1);
    }

    #[test]
    fn test_draw_by_player_is_scored() {
        let mut engine = GameEngine::from_board(parse("XOX/XOO/OX."), Side::Player);

        assert!(engine.apply_player_move(8));

        assert_eq!(engine.status(), GameStatus::GameOver(GameOutcome::Draw));
        assert_eq!(engine.scores().draws, 1);
    }

    #[test]
    fn test_full_game_against_engine_never_lost() {
        let mut engine = GameEngine::new();
        let mut moves = [0, 1, 2, 3, 5, 6, 7, 8, 4].into_iter();

        loop {
            match engine.status() {
                GameStatus::GameOver(_) => break,
                GameStatus::AiTurn => {
                    engine.apply_ai_move();
                }
                GameStatus::PlayerTurn => {
                    let index = moves
                        .by_ref()
                        .find(|&index| engine.board().is_empty_cell(index))
                        .unwrap();
                    engine.apply_player_move(index);
                }
            }
        }

        assert_ne!(engine.snapshot().outcome, GameOutcome::Win(Side::Player));
        assert!(engine.snapshot().outcome.is_over());
        assert_eq!(engine.scores().games_played(), 1);
    }

    #[test]
    fn test_reset_keeps_scores_and_bumps_generation() {
        let mut engine = GameEngine::from_board(parse("XX./OO./..."), Side::Player);
        engine.apply_player_move(2);
        let generation = engine.generation();

        engine.reset();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.board, Board::new());
        assert_eq!(snapshot.turn, Side::Player);
        assert_eq!(snapshot.outcome, GameOutcome::InProgress);
        assert_eq!(snapshot.last_move, None);
        assert_eq!(snapshot.scores.player_wins, 1);
        assert_eq!(engine.generation(), generation + 1);
    }

    #[test]
    fn test_reset_twice_equals_reset_once() {
        let mut once = GameEngine::new();
        once.apply_player_move(4);
        once.apply_ai_move();
        let mut twice = once.clone();

        once.reset();
        twice.reset();
        twice.reset();

        assert_eq!(once.snapshot(), twice.snapshot());
    }

    #[test]
    fn test_stale_generation_ai_move_is_discarded() {
        let mut engine = GameEngine::new();
        engine.apply_player_move(0);
        let scheduled_in = engine.generation();

        engine.reset();
        engine.apply_player_move(8);

        assert!(!engine.apply_ai_move_for(scheduled_in));
        assert_eq!(engine.board().count(Mark::O), 0);
        assert!(engine.apply_ai_move_for(engine.generation()));
        assert_eq!(engine.board().count(Mark::O), 1);
    }
}
