use super::board::{Board, is_board_full};
use super::types::{CELL_COUNT, Mark, Side};
use super::win_detector::check_winner;

pub const WIN_SCORE: i32 = 10;

/// Picks the AI (O) reply for `board`, or `None` when no cell is free.
///
/// Every free cell is tried in ascending order and scored by a full minimax
/// search with the Player replying; the first cell with the highest score wins.
pub fn get_best_move(board: &Board) -> Option<usize> {
    let mut board = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in 0..CELL_COUNT {
        if !board.is_empty_cell(index) {
            continue;
        }

        board.set(index, Mark::O);
        let score = minimax(&mut board, 0, false);
        board.clear(index);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Exhaustive minimax from the AI's point of view.
///
/// Wins score `10 - depth` and losses `depth - 10`, so quicker wins and slower
/// losses rank higher. `board` is restored before returning.
pub fn minimax(board: &mut Board, depth: i32, is_maximizing: bool) -> i32 {
    match check_winner(board) {
        Some(Side::Ai) => return WIN_SCORE - depth,
        Some(Side::Player) => return depth - WIN_SCORE,
        None => {}
    }

    if is_board_full(board) {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in 0..CELL_COUNT {
            if !board.is_empty_cell(index) {
                continue;
            }

            board.set(index, Mark::O);
            let eval = minimax(board, depth + 1, false);
            board.clear(index);

            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in 0..CELL_COUNT {
            if !board.is_empty_cell(index) {
                continue;
            }

            board.set(index, Mark::X);
            let eval = minimax(board, depth + 1, true);
            board.clear(index);

            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
