// Board export: write the roster snapshot as pretty-printed JSON.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::draft::DraftSnapshot;

/// Render a snapshot as JSON with two-space indentation.
pub fn board_json(snapshot: &DraftSnapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).context("failed to serialize draft board")
}

/// Write the board to `path`, creating parent directories as needed.
pub fn save_board(snapshot: &DraftSnapshot, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let json = board_json(snapshot)?;
    std::fs::write(path, json + "\n")
        .with_context(|| format!("failed to write draft board to {}", path.display()))?;
    info!("Saved draft board to {}", path.display());
    Ok(())
}
