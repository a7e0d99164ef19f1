// Individual pick representation: the role a pick fills, the applied-pick
// log entry, and the "whose turn is it" view of the next pick.

use std::fmt;

/// The roster category a pick fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Starter,
    Reserve,
}

impl Role {
    pub fn display_str(&self) -> &'static str {
        match self {
            Role::Starter => "starter",
            Role::Reserve => "reserve",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// One applied pick, as recorded in the draft history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickRecord {
    /// Cursor value at the moment the pick was applied (0-indexed).
    pub pick_index: usize,
    /// Index of the team that made the pick.
    pub team_index: usize,
    /// Name of the drafted player.
    pub player: String,
}

/// The pick currently on the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickSlot {
    /// 0-indexed position in the pick order.
    pub pick_index: usize,
    /// 1-indexed pick number, for display.
    pub pick_number: usize,
    /// 1-indexed round number.
    pub round: usize,
    pub team_index: usize,
    pub team_name: String,
    pub role: Role,
}
