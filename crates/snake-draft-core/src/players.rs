// Player list loading: one name per line, or numbered placeholders.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

/// Read player names from a text file, one per line.
///
/// Lines are trimmed, blank lines are skipped, and repeated names are
/// dropped (the first occurrence keeps its place in the order).
pub fn load_players(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read players file {}", path.display()))?;
    let players = parse_players(&text);
    info!("Loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

/// Parse the contents of a players file. See [`load_players`].
pub fn parse_players(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut players = Vec::new();
    for line in text.lines() {
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        if !seen.insert(name.to_string()) {
            warn!("Skipping duplicate player '{}'", name);
            continue;
        }
        players.push(name.to_string());
    }
    players
}

/// Placeholder names `Player 1` through `Player count`.
pub fn default_players(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Player {i}")).collect()
}

/// Resolve the player pool for a draft of `total_picks` picks.
///
/// Reads `path` when it is set and exists. A configured file that does not
/// exist falls back to placeholders with a warning, as does no file at all.
pub fn load_or_default(path: Option<&Path>, total_picks: usize) -> Result<Vec<String>> {
    match path {
        Some(p) if p.exists() => load_players(p),
        Some(p) => {
            warn!(
                "Players file {} not found; using {} placeholder players",
                p.display(),
                total_picks
            );
            Ok(default_players(total_picks))
        }
        None => Ok(default_players(total_picks)),
    }
}
