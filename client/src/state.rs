/// A line of terminal input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    PlaceMark { index: usize },
    NewGame,
    Help,
    Quit,
    Invalid { input: String },
}

pub fn parse_command(line: &str) -> Option<ClientCommand> {
    let input = line.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let command = match input.as_str() {
        "new" | "n" | "new game" | "restart" | "y" | "yes" => ClientCommand::NewGame,
        "quit" | "exit" | "q" | "no" => ClientCommand::Quit,
        "help" | "h" | "?" => ClientCommand::Help,
        _ => match input.parse::<usize>() {
            Ok(cell) if (1..=9).contains(&cell) => ClientCommand::PlaceMark { index: cell - 1 },
            _ => ClientCommand::Invalid { input },
        },
    };
    Some(command)
}
