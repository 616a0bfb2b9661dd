use tictactoe_common::games::tictactoe::{
    BOARD_SIZE, Board, GameOutcome, GameSnapshot, GameStatus, Mark, Side, WinningLine,
};

use crate::colors::Palette;

pub const WELCOME: &str = "Welcome to Tic Tac Toe!\nYou are X, AI is O\nEnter position (1-9) to make your move, 'help' for commands\n";

pub const HELP: &str = "Commands:\n  1-9   place X on that cell\n  new   start a new game (scores are kept)\n  quit  leave the game\n  help  show this message";

pub const ROW_SEPARATOR: &str = "-----------";

/// Draws the board with 1-based numbers on free cells.
pub fn render_board(board: &Board, palette: &Palette, winning_line: Option<WinningLine>) -> String {
    let rows: Vec<String> = board
        .cells()
        .chunks(BOARD_SIZE)
        .enumerate()
        .map(|(row, marks)| {
            let cells: Vec<String> = marks
                .iter()
                .enumerate()
                .map(|(col, &mark)| {
                    let index = row * BOARD_SIZE + col;
                    render_cell(index, mark, palette, winning_line)
                })
                .collect();
            format!(" {} ", cells.join(" | "))
        })
        .collect();

    rows.join(&format!("\n{}\n", ROW_SEPARATOR))
}

fn render_cell(index: usize, mark: Mark, palette: &Palette, winning_line: Option<WinningLine>) -> String {
    let text = match mark {
        Mark::X => palette.paint(palette.player, "X"),
        Mark::O => palette.paint(palette.ai, "O"),
        Mark::Empty => palette.paint(palette.hint, &(index + 1).to_string()),
    };

    if winning_line.is_some_and(|line| line.contains(index)) {
        palette.paint(palette.highlight, &text)
    } else {
        text
    }
}

pub fn outcome_message(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::Win(Side::Player) => "You Win!",
        GameOutcome::Win(Side::Ai) => "AI Wins!",
        GameOutcome::Draw => "Draw!",
        GameOutcome::InProgress => "",
    }
}

pub fn status_line(snapshot: &GameSnapshot) -> &'static str {
    match snapshot.status() {
        GameStatus::PlayerTurn => "Your move (1-9): ",
        GameStatus::AiTurn => "AI is thinking...",
        GameStatus::GameOver(_) => "Type 'new' to play again or 'quit' to exit.",
    }
}

/// Explains why clicking `index` would be ignored, or `None` if the click is valid.
pub fn rejection_message(snapshot: &GameSnapshot, index: usize) -> Option<&'static str> {
    match snapshot.status() {
        GameStatus::PlayerTurn if snapshot.board.is_empty_cell(index) => None,
        GameStatus::PlayerTurn => Some("Invalid move! Try again."),
        GameStatus::AiTurn => Some("Wait for the AI to move."),
        GameStatus::GameOver(_) => Some("The game is over. Type 'new' to play again."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::tictactoe::{GameEngine, ScoreBoard};

    fn snapshot_of(board: &str, turn: Side) -> GameSnapshot {
        GameEngine::from_board(board.parse().unwrap(), turn).snapshot()
    }

    #[test]
    fn test_render_empty_board_shows_cell_numbers() {
        let rendered = render_board(&Board::new(), &Palette::plain(), None);

        assert_eq!(
            rendered,
            " 1 | 2 | 3 \n-----------\n 4 | 5 | 6 \n-----------\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_render_marks() {
        let board: Board = "X../.O./...".parse().unwrap();

        let rendered = render_board(&board, &Palette::plain(), None);

        assert!(rendered.starts_with(" X | 2 | 3 "));
        assert!(rendered.contains(" 4 | O | 6 "));
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let palette = Palette::for_theme(crate::config::Theme::Light, true);
        let line = WinningLine::new(Side::Player, [0, 1, 2]);

        let rendered = render_board(&board, &palette, Some(line));

        assert_eq!(rendered.matches(palette.highlight).count(), 3);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(outcome_message(GameOutcome::Win(Side::Player)), "You Win!");
        assert_eq!(outcome_message(GameOutcome::Win(Side::Ai)), "AI Wins!");
        assert_eq!(outcome_message(GameOutcome::Draw), "Draw!");
    }

    #[test]
    fn test_rejection_of_occupied_cell() {
        let snapshot = snapshot_of("X../.O./...", Side::Player);

        assert_eq!(rejection_message(&snapshot, 0), Some("Invalid move! Try again."));
        assert_eq!(rejection_message(&snapshot, 1), None);
    }

    #[test]
    fn test_rejection_during_ai_turn_and_after_game() {
        let ai_turn = snapshot_of("X../.../...", Side::Ai);
        let finished = snapshot_of("XXX/OO./...", Side::Player);

        assert_eq!(rejection_message(&ai_turn, 4), Some("Wait for the AI to move."));
        assert!(rejection_message(&finished, 8).is_some());
        assert_eq!(finished.scores, ScoreBoard::default());
    }

    #[test]
    fn test_status_line_follows_turn() {
        assert_eq!(status_line(&snapshot_of(".........", Side::Player)), "Your move (1-9): ");
        assert_eq!(status_line(&snapshot_of("X........", Side::Ai)), "AI is thinking...");
    }
}
