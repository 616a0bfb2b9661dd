use std::fmt;

use super::types::{GameOutcome, Side};

/// Running tally of finished games for the lifetime of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub player_wins: u32,
    pub ai_wins: u32,
    pub draws: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Side::Player) => self.player_wins += 1,
            GameOutcome::Win(Side::Ai) => self.ai_wins += 1,
            GameOutcome::Draw => self.draws += 1,
            GameOutcome::InProgress => {}
        }
    }

    pub fn games_played(&self) -> u32 {
        self.player_wins + self.ai_wins + self.draws
    }
}

impl fmt::Display for ScoreBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scores - You: {}, AI: {}, Draws: {}",
            self.player_wins, self.ai_wins, self.draws
        )
    }
}
