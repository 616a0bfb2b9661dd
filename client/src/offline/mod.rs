mod broadcaster;
mod tictactoe_runner;

pub use broadcaster::{LocalBroadcaster, ViewEvent};
pub use tictactoe_runner::{run_tictactoe_game, spawn_stdin_reader};
