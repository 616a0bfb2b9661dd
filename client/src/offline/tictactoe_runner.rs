use std::io::Write;

use tictactoe_common::games::tictactoe::{
    GameStatus, ScoreBoard, TicTacToeSession, TicTacToeSessionSettings,
};
use tictactoe_common::log;
use tokio::sync::mpsc;

use crate::colors::Palette;
use crate::state::{ClientCommand, parse_command};
use crate::ui::{HELP, WELCOME, outcome_message, rejection_message, render_board, status_line};
use super::{LocalBroadcaster, ViewEvent};

/// Forwards parsed stdin lines from a dedicated thread; sends `Quit` at end of input.
pub fn spawn_stdin_reader(command_tx: mpsc::UnboundedSender<ClientCommand>) {
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            match line {
                Ok(line) => {
                    if let Some(command) = parse_command(&line) {
                        if command_tx.send(command).is_err() {
                            return;
                        }
                    }
                }
                Err(e) => {
                    log!("Failed to read from stdin: {}", e);
                    break;
                }
            }
        }
        let _ = command_tx.send(ClientCommand::Quit);
    });
}

/// Plays games until `Quit` arrives or the command channel closes; returns the final tally.
pub async fn run_tictactoe_game<W: Write>(
    settings: TicTacToeSessionSettings,
    palette: Palette,
    command_rx: &mut mpsc::UnboundedReceiver<ClientCommand>,
    out: &mut W,
) -> ScoreBoard {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let session = TicTacToeSession::new(settings, LocalBroadcaster::new(event_tx));

    write_line(out, WELCOME);
    session.mount().await;

    loop {
        tokio::select! {
            biased;

            Some(event) = event_rx.recv() => {
                render_event(out, &palette, &event);
            }
            command = command_rx.recv() => {
                let Some(command) = command else {
                    break;
                };
                match command {
                    ClientCommand::PlaceMark { index } => {
                        let snapshot = session.get_state().await;
                        match rejection_message(&snapshot, index) {
                            Some(message) => write_line(out, message),
                            None => session.on_cell_click(index).await,
                        }
                    }
                    ClientCommand::NewGame => session.on_new_game_click().await,
                    ClientCommand::Help => write_line(out, HELP),
                    ClientCommand::Invalid { input } => write_line(
                        out,
                        &format!("'{}' is not a move. Please enter a number between 1 and 9", input),
                    ),
                    ClientCommand::Quit => break,
                }
            }
        }
    }

    while let Ok(event) = event_rx.try_recv() {
        render_event(out, &palette, &event);
    }
    session.unmount().await;

    let scores = session.get_state().await.scores;
    write_line(out, &format!("\n{}", scores));
    write_line(out, "Thanks for playing!");
    scores
}

fn render_event<W: Write>(out: &mut W, palette: &Palette, event: &ViewEvent) {
    match event {
        ViewEvent::State(snapshot) => {
            let board = render_board(&snapshot.board, palette, snapshot.winning_line());
            write_line(out, &format!("\n{}\n", board));
            match snapshot.status() {
                GameStatus::PlayerTurn => write_prompt(out, status_line(snapshot)),
                GameStatus::AiTurn => write_line(out, status_line(snapshot)),
                GameStatus::GameOver(_) => {}
            }
        }
        ViewEvent::GameOver(notification) => {
            write_line(out, outcome_message(notification.outcome));
            write_line(out, &notification.scores.to_string());
            write_line(out, "Type 'new' to play again or 'quit' to exit.");
        }
    }
}

fn write_line<W: Write>(out: &mut W, text: &str) {
    if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
        log!("Failed to write to terminal: {}", e);
    }
}

fn write_prompt<W: Write>(out: &mut W, text: &str) {
    if let Err(e) = write!(out, "{}", text).and_then(|_| out.flush()) {
        log!("Failed to write to terminal: {}", e);
    }
}
