// Interactive draft session.
//
// Lines arrive over an mpsc channel (fed by a stdin reader thread in the
// binary, or directly by tests). Each line is parsed into a UserCommand,
// applied to the DraftState, and the result is written to `out`. The session
// owns no draft logic of its own.

use anyhow::Result;
use snake_draft_core::draft::DraftState;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::command::{parse_command, UserCommand};
use crate::render;

const PROMPT: &str = "Enter player number or name (/help for commands, q to quit): ";

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every scheduled pick was made.
    Completed,
    /// The operator quit.
    Aborted,
    /// Input ran out before the draft finished.
    InputClosed,
}

/// Result of applying one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Text to show the operator.
    pub message: String,
    /// Whether the pick header and pool should be shown again.
    pub refresh: bool,
    pub quit: bool,
}

impl CommandResult {
    fn show(message: String) -> Self {
        CommandResult {
            message,
            refresh: false,
            quit: false,
        }
    }

    fn changed(message: String) -> Self {
        CommandResult {
            message,
            refresh: true,
            quit: false,
        }
    }
}

/// Apply one parsed command to the draft.
pub fn apply_command(state: &mut DraftState, command: UserCommand) -> CommandResult {
    match command {
        UserCommand::Pick(input) => match state.pick_by_input(&input) {
            Ok(record) => CommandResult::changed(render::describe_pick(state, &record)),
            Err(e) => CommandResult::show(render::describe_error(&e)),
        },
        UserCommand::AutoPick => match state.auto_pick_next() {
            Ok(record) => CommandResult::changed(render::describe_pick(state, &record)),
            Err(e) => CommandResult::show(render::describe_error(&e)),
        },
        UserCommand::AutoComplete => {
            let made = state.auto_complete_remaining();
            let mut message = format!("Auto-picked {made} players.");
            if state.is_stalled() {
                message.push_str(&format!(
                    " Ran out of players with {} picks left.",
                    state.remaining_picks()
                ));
            }
            CommandResult::changed(message)
        }
        UserCommand::Undo => match state.undo_last() {
            Ok(record) => CommandResult::changed(format!(
                "Undid pick {}: {} is available again.",
                record.pick_index + 1,
                record.player
            )),
            Err(e) => CommandResult::show(render::describe_error(&e)),
        },
        UserCommand::ShowBoard => CommandResult::show(render::board(state.teams())),
        UserCommand::Help => CommandResult::show(render::HELP.to_string()),
        UserCommand::Quit => CommandResult {
            message: "Draft aborted.".to_string(),
            refresh: false,
            quit: true,
        },
        UserCommand::Unknown(cmd) => {
            CommandResult::show(format!("Unknown command '{cmd}'. Type /help for commands."))
        }
    }
}

/// Drive the draft from operator input until it completes, the operator
/// quits, or input closes.
pub async fn run<W>(
    state: &mut DraftState,
    input: &mut mpsc::Receiver<String>,
    out: &mut W,
) -> Result<SessionOutcome>
where
    W: AsyncWrite + Unpin,
{
    let mut refresh = true;
    loop {
        if state.is_complete() {
            out.write_all(b"\nDraft complete.\n").await?;
            out.flush().await?;
            info!("Draft complete after {} picks", state.pick_index());
            return Ok(SessionOutcome::Completed);
        }

        if refresh {
            out.write_all(render::pick_prompt(state).as_bytes()).await?;
            refresh = false;
        }
        out.write_all(PROMPT.as_bytes()).await?;
        out.flush().await?;

        let Some(line) = input.recv().await else {
            out.write_all(b"\nInput closed; draft left unfinished.\n").await?;
            out.flush().await?;
            info!("Input closed at pick {}", state.pick_index());
            return Ok(SessionOutcome::InputClosed);
        };
        let Some(command) = parse_command(&line) else {
            continue;
        };
        debug!("Command: {:?}", command);

        let result = apply_command(state, command);
        out.write_all(result.message.as_bytes()).await?;
        if !result.message.ends_with('\n') {
            out.write_all(b"\n").await?;
        }
        if result.quit {
            out.flush().await?;
            info!("Draft aborted at pick {}", state.pick_index());
            return Ok(SessionOutcome::Aborted);
        }
        refresh = result.refresh;
    }
}
