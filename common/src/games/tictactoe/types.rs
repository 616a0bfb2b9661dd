use std::fmt;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn side(&self) -> Option<Side> {
        match self {
            Mark::X => Some(Side::Player),
            Mark::O => Some(Side::Ai),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => '.',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            '.' | '_' | ' ' | '-' => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Who owns a mark: the human Player always plays X, the AI always plays O.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    pub fn mark(&self) -> Mark {
        match self {
            Side::Player => Mark::X,
            Side::Ai => Mark::O,
        }
    }

    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Ai => write!(f, "AI"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Side),
    Draw,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

/// Phase of a game as seen by the session: whose move it is, or how it ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    PlayerTurn,
    AiTurn,
    GameOver(GameOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub side: Side,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(side: Side, cells: [usize; 3]) -> Self {
        Self { side, cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}
