// Error types returned by draft engine operations.

use thiserror::Error;

/// A failed draft operation. None of these are fatal: the state is left
/// exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("no available player matches `{query}`")]
    NotFound { query: String },

    #[error("selection {index} is out of range (1-{len} available)")]
    OutOfRange { index: usize, len: usize },

    #[error("`{query}` matches {total} players: {}", .candidates.join(", "))]
    Ambiguous {
        query: String,
        /// Matching names, capped at [`crate::draft::select::MAX_CANDIDATES`].
        candidates: Vec<String>,
        /// Total number of matches before capping.
        total: usize,
    },

    #[error("the draft is complete")]
    DraftComplete,

    #[error("no picks to undo")]
    NothingToUndo,

    #[error("only {have} players for {need} scheduled picks")]
    InsufficientPlayers { have: usize, need: usize },

    #[error("no players remain but picks are still scheduled")]
    PoolExhausted,

    #[error("player `{name}` is listed more than once")]
    DuplicatePlayer { name: String },

    #[error("invalid draft settings: {message}")]
    InvalidSettings { message: String },

    #[error("history says `{player}` went to {team}, but the roster disagrees")]
    HistoryMismatch { player: String, team: String },
}
