// Operator input parsing.
//
// Each line typed at the prompt becomes one UserCommand. Anything that is not
// a recognized command is treated as a pick selection (list number or name).

/// One line of operator input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Pick by list number or (partial) name.
    Pick(String),
    /// Pick the front of the available list.
    AutoPick,
    /// Auto-pick every remaining slot.
    AutoComplete,
    Undo,
    ShowBoard,
    Help,
    Quit,
    /// A `/command` we don't know.
    Unknown(String),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Option<UserCommand> {
    let input = line.trim();
    if input.is_empty() {
        return None;
    }

    if input.eq_ignore_ascii_case("q") {
        return Some(UserCommand::Quit);
    }
    if input == "?" {
        return Some(UserCommand::Help);
    }

    let Some(name) = input.strip_prefix('/') else {
        return Some(UserCommand::Pick(input.to_string()));
    };

    let cmd = match name.to_lowercase().as_str() {
        "auto" | "a" => UserCommand::AutoPick,
        "finish" | "f" => UserCommand::AutoComplete,
        "undo" | "u" => UserCommand::Undo,
        "board" | "b" => UserCommand::ShowBoard,
        "help" | "h" => UserCommand::Help,
        "quit" | "q" => UserCommand::Quit,
        _ => UserCommand::Unknown(input.to_string()),
    };
    Some(cmd)
}
