use super::board::Board;
use super::types::{Mark, Side, WinningLine};

/// Rows, then columns, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_winner(board: &Board) -> Option<Side> {
    check_winner_with_line(board).map(|line| line.side)
}

pub fn check_winner_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    for line in LINES {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark == Mark::Empty {
            continue;
        }
        if mark == cells[b] && mark == cells[c] {
            return mark.side().map(|side| WinningLine::new(side, line));
        }
    }
    None
}
