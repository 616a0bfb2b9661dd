mod colors;
mod config;
mod offline;
mod state;
mod ui;

use std::io::IsTerminal;

use clap::Parser;
use tictactoe_common::games::tictactoe::TicTacToeSessionSettings;
use tictactoe_common::log;
use tictactoe_common::logger::{self, LogOutput};
use tokio::sync::mpsc;

use colors::Palette;
use config::{DEFAULT_CONFIG_FILE, Theme, Validate, get_config_manager};
use offline::{run_tictactoe_game, spawn_stdin_reader};

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a minimax AI")]
struct Args {
    /// YAML file holding the AI delay and theme preference
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Pause before the AI answers, in milliseconds (not saved)
    #[arg(long)]
    ai_delay_ms: Option<u64>,

    /// Color theme; saved to the config file
    #[arg(long, value_enum)]
    theme: Option<Theme>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write log lines to stderr
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    let output = if args.verbose {
        LogOutput::Stderr
    } else {
        LogOutput::Silent
    };
    logger::init_logger(prefix, output);

    let config_manager = get_config_manager(&args.config);
    let mut config = config_manager.get_config()?;

    if let Some(theme) = args.theme
        && theme != config.appearance.theme
    {
        config.appearance.theme = theme;
        config_manager.set_config(&config)?;
        log!("Saved theme preference {:?} to {}", theme, args.config);
    }

    if let Some(ai_delay_ms) = args.ai_delay_ms {
        config.game.ai_move_delay_ms = ai_delay_ms;
        config.validate()?;
    }

    let settings = TicTacToeSessionSettings::with_ai_move_delay_ms(config.game.ai_move_delay_ms);
    let palette = Palette::for_output(
        config.appearance.theme,
        config.appearance.use_colors,
        std::io::stdout().is_terminal(),
    );

    let (command_tx, mut command_rx) = mpsc::unbounded_channel();
    spawn_stdin_reader(command_tx);

    let mut stdout = std::io::stdout();
    let scores = run_tictactoe_game(settings, palette, &mut command_rx, &mut stdout).await;
    log!("Session finished after {} games", scores.games_played());

    Ok(())
}
