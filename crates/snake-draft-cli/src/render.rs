// Plain-text rendering of draft state for the terminal.

use std::fmt::Write;

use snake_draft_core::draft::order::role_for_pick;
use snake_draft_core::draft::{DraftError, DraftState, PickRecord, Role, Team};

pub const HELP: &str = "\
Commands:
  <number>   pick the player at that position in the list
  <name>     pick by name (exact or partial, case-insensitive)
  /auto      pick the first available player
  /finish    auto-pick every remaining slot
  /undo      revert the most recent pick
  /board     show every team's roster
  /help      show this help
  q          quit (the board is still saved)
";

/// Header and numbered pool for the pick on the clock, or a notice when
/// the draft is complete or stalled.
pub fn pick_prompt(state: &DraftState) -> String {
    let mut out = String::new();
    let Some(slot) = state.current_slot() else {
        out.push_str("\nDraft complete.\n");
        return out;
    };

    let _ = writeln!(
        out,
        "\nPick {}/{} - {} ({})",
        slot.pick_number,
        state.total_picks(),
        slot.team_name,
        slot.role
    );
    if state.is_stalled() {
        out.push_str("No players remain for this pick. Use /undo, /board, or q.\n");
        return out;
    }
    out.push_str(&available_list(state.available()));
    out
}

/// The available pool, numbered from 1.
pub fn available_list(available: &[String]) -> String {
    let mut out = String::new();
    for (i, player) in available.iter().enumerate() {
        let _ = writeln!(out, "{:2}. {}", i + 1, player);
    }
    out
}

/// One line describing an applied pick.
pub fn describe_pick(state: &DraftState, record: &PickRecord) -> String {
    let settings = state.settings();
    let role = role_for_pick(
        record.pick_index,
        settings.num_teams,
        settings.starters_per_team,
    );
    let team = state
        .team(record.team_index)
        .map(|t| t.name.as_str())
        .unwrap_or("?");
    format!("Selected: {} -> {} ({})", record.player, team, role)
}

/// Operator-facing message for a failed operation.
pub fn describe_error(err: &DraftError) -> String {
    match err {
        DraftError::NotFound { query } if query.is_empty() => "No match.".to_string(),
        DraftError::NotFound { query } => format!("No match for '{query}'."),
        DraftError::OutOfRange { len: 0, .. } => "Invalid number: no players remain.".to_string(),
        DraftError::OutOfRange { len, .. } => format!("Invalid number: choose 1-{len}."),
        DraftError::Ambiguous {
            candidates, total, ..
        } => {
            let mut msg = format!("Multiple matches: {}", candidates.join(", "));
            if *total > candidates.len() {
                let _ = write!(msg, " (and {} more)", total - candidates.len());
            }
            msg
        }
        other => {
            let mut msg = other.to_string();
            if let Some(upper) = msg.get(..1).map(str::to_uppercase) {
                msg.replace_range(..1, &upper);
            }
            msg.push('.');
            msg
        }
    }
}

/// Every team's roster, starters then reserves.
pub fn board(teams: &[Team]) -> String {
    let mut out = String::new();
    for team in teams {
        let _ = writeln!(out, "{}", team.name);
        for role in [Role::Starter, Role::Reserve] {
            let _ = writeln!(out, "  {}s: {}", role, join_or_dash(team.players(role)));
        }
    }
    out
}

fn join_or_dash(players: &[String]) -> String {
    if players.is_empty() {
        "-".to_string()
    } else {
        players.join(", ")
    }
}
