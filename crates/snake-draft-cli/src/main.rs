// Snake draft entry point.
//
// Startup sequence:
// 1. Parse arguments, initialize tracing (log to file, not terminal)
// 2. Load config and apply overrides
// 3. Load the player pool, build the DraftState
// 4. Run the draft (auto, or interactive until done/quit/Ctrl+C)
// 5. Save the board

use std::io::BufRead;

use anyhow::Context;
use clap::Parser;
use snake_draft::cli::Cli;
use snake_draft::session::{self, SessionOutcome};
use snake_draft_core::draft::{DraftError, DraftState};
use snake_draft_core::{export, players};
use tokio::sync::mpsc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Initialize tracing
    init_tracing()?;
    info!("Snake draft starting up");

    // 2. Load config
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let config = cli
        .resolve_config(&cwd)
        .context("failed to load configuration")?;
    let settings = config.settings();
    info!(
        "Config loaded: {} teams, {} starters + {} reserves each",
        settings.num_teams, settings.starters_per_team, settings.reserves_per_team
    );

    // 3. Build the draft
    let pool = players::load_or_default(config.files.players.as_deref(), settings.total_picks())?;
    let mut state = DraftState::with_team_names(pool, &settings, config.team_names())
        .context("failed to start draft")?;
    if let Err(DraftError::InsufficientPlayers { have, need }) = state.check_pool_size() {
        println!("Warning: only {have} players, expected {need}. Draft may stall.");
    }

    // 4. Run it
    if cli.auto {
        let made = state.auto_complete_remaining();
        println!("Auto-drafted {made} picks.");
        if state.is_stalled() {
            println!(
                "Ran out of players with {} of {} picks left.",
                state.remaining_picks(),
                state.total_picks()
            );
        }
    } else {
        let outcome = run_interactive(&mut state).await?;
        info!("Session ended: {:?}", outcome);
    }

    // 5. Save the board
    let path = &config.files.export;
    export::save_board(&state.snapshot(), path)
        .with_context(|| format!("failed to save board to {}", path.display()))?;
    println!("Saved draft board to {}", path.display());

    Ok(())
}

/// Run the interactive session on stdin/stdout. Ctrl+C aborts the same way
/// `q` does, leaving the state as it was after the last completed command.
async fn run_interactive(state: &mut DraftState) -> anyhow::Result<SessionOutcome> {
    let (line_tx, mut line_rx) = mpsc::channel(64);

    // Blocking stdin reads can't be cancelled, so they get a plain thread
    // rather than a runtime task; it dies with the process.
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    warn!("Stopped reading stdin: {}", e);
                    break;
                }
            };
            if line_tx.blocking_send(line).is_err() {
                break;
            }
        }
    });

    let mut stdout = tokio::io::stdout();
    tokio::select! {
        res = session::run(state, &mut line_rx, &mut stdout) => res,
        _ = tokio::signal::ctrl_c() => {
            warn!("Interrupted at pick {}", state.pick_index());
            println!("\nDraft aborted.");
            Ok(SessionOutcome::Aborted)
        }
    }
}

const DEFAULT_LOG_FILTER: &str = "snake_draft=info,snake_draft_core=info,warn";

/// Send draft logs to `logs/snake-draft.log`; stdout belongs to the pick
/// prompt. `RUST_LOG` overrides the default filter.
fn init_tracing() -> anyhow::Result<()> {
    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create {}", log_dir.display()))?;
    let log_file = std::fs::File::create(log_dir.join("snake-draft.log"))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .with_line_number(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set tracing subscriber: {e}"))
}
