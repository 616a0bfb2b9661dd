use std::fmt;
use std::str::FromStr;

use super::types::{BOARD_SIZE, CELL_COUNT, Mark};

/// 3x3 grid stored row-major: index `row * 3 + col`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_cell(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_board_full(board: &Board) -> bool {
    board.is_full()
}

impl FromStr for Board {
    type Err = String;

    /// Accepts nine cell symbols, ignoring `|`, `/`, commas and line breaks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '|' | '/' | ',' | '\n' | '\r'))
            .collect();

        if symbols.len() != CELL_COUNT {
            return Err(format!(
                "Board needs {} cells, got {}",
                CELL_COUNT,
                symbols.len()
            ));
        }

        let mut cells = [Mark::Empty; CELL_COUNT];
        for (index, symbol) in symbols.into_iter().enumerate() {
            cells[index] = Mark::from_symbol(symbol)
                .ok_or_else(|| format!("Unknown cell symbol '{}' at index {}", symbol, index))?;
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for mark in chunk {
                write!(f, "{}", mark)?;
            }
        }
        Ok(())
    }
}
