// Team rosters: ordered starter and reserve lists.

use serde::{Deserialize, Serialize};

use super::pick::Role;

/// A team and the players it has drafted, in pick order.
///
/// This is also the export shape: `{"name", "starters", "reserves"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub starters: Vec<String>,
    pub reserves: Vec<String>,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Team {
            name: name.into(),
            starters: Vec::new(),
            reserves: Vec::new(),
        }
    }

    /// The list filled by picks of the given role.
    pub fn players(&self, role: Role) -> &[String] {
        match role {
            Role::Starter => &self.starters,
            Role::Reserve => &self.reserves,
        }
    }

    fn players_mut(&mut self, role: Role) -> &mut Vec<String> {
        match role {
            Role::Starter => &mut self.starters,
            Role::Reserve => &mut self.reserves,
        }
    }

    /// Append a player to the list for `role`.
    pub(crate) fn add_player(&mut self, player: String, role: Role) {
        self.players_mut(role).push(player);
    }

    /// Remove the most recent occurrence of `player` from the list for
    /// `role`. Returns false if the player is not on that list.
    pub(crate) fn remove_player(&mut self, player: &str, role: Role) -> bool {
        let list = self.players_mut(role);
        match list.iter().rposition(|p| p == player) {
            Some(idx) => {
                list.remove(idx);
                true
            }
            None => false,
        }
    }

}
