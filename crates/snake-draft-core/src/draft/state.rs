// Draft state: available pool, team rosters, pick schedule, and undo history.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::error::DraftError;
use super::order::{generate_order, role_for_pick, round_for_pick};
use super::pick::{PickRecord, PickSlot, Role};
use super::roster::Team;
use super::select;

/// Static shape of a draft: how many teams, and how many rounds of each role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftSettings {
    pub num_teams: usize,
    pub starters_per_team: usize,
    pub reserves_per_team: usize,
}

impl DraftSettings {
    /// Picks each team makes, which is also the number of rounds.
    pub fn picks_per_team(&self) -> usize {
        self.starters_per_team + self.reserves_per_team
    }

    /// Length of the full pick schedule.
    pub fn total_picks(&self) -> usize {
        self.num_teams * self.picks_per_team()
    }
}

impl Default for DraftSettings {
    fn default() -> Self {
        DraftSettings {
            num_teams: 9,
            starters_per_team: 5,
            reserves_per_team: 2,
        }
    }
}

/// Read-only projection of the team rosters, suitable for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSnapshot {
    pub teams: Vec<Team>,
}

/// The complete state of one draft session.
///
/// Invariants held between calls:
/// - `available` plus every rostered player is exactly `players`, with no
///   duplicates.
/// - `history.len() == pick_index <= order.len()`.
/// - The team and role for a pick are derived from `order` and the settings,
///   never stored separately.
#[derive(Debug, Clone)]
pub struct DraftState {
    settings: DraftSettings,
    /// Every candidate, in the order the draft started with.
    players: Vec<String>,
    /// Players not yet picked. The front is the next auto-pick.
    available: Vec<String>,
    teams: Vec<Team>,
    /// Team index for every pick in the draft, computed once.
    order: Vec<usize>,
    pick_index: usize,
    history: Vec<PickRecord>,
}

impl DraftState {
    /// Start a draft with teams named `Team 1` through `Team N`.
    ///
    /// A pool smaller than the schedule is allowed (the draft will stall
    /// once it runs dry); see [`DraftState::check_pool_size`].
    pub fn new(players: Vec<String>, settings: &DraftSettings) -> Result<Self, DraftError> {
        let names = (1..=settings.num_teams)
            .map(|i| format!("Team {i}"))
            .collect();
        Self::with_team_names(players, settings, names)
    }

    /// Start a draft with explicit team names, one per team in pick order.
    pub fn with_team_names(
        players: Vec<String>,
        settings: &DraftSettings,
        team_names: Vec<String>,
    ) -> Result<Self, DraftError> {
        if settings.num_teams == 0 {
            return Err(DraftError::InvalidSettings {
                message: "a draft needs at least one team".into(),
            });
        }
        if team_names.len() != settings.num_teams {
            return Err(DraftError::InvalidSettings {
                message: format!(
                    "{} team names given for {} teams",
                    team_names.len(),
                    settings.num_teams
                ),
            });
        }

        if let Some(name) = first_duplicate(&players) {
            return Err(DraftError::DuplicatePlayer { name });
        }

        let order = generate_order(settings.num_teams, settings.picks_per_team());
        if players.len() < order.len() {
            warn!(
                "Only {} players for {} scheduled picks; the draft will stall",
                players.len(),
                order.len()
            );
        }

        Ok(DraftState {
            settings: *settings,
            available: players.clone(),
            players,
            teams: team_names.into_iter().map(Team::new).collect(),
            order,
            pick_index: 0,
            history: Vec::new(),
        })
    }

    /// Report whether the pool covers every scheduled pick.
    pub fn check_pool_size(&self) -> Result<(), DraftError> {
        let need = self.order.len();
        let have = self.players.len();
        if have < need {
            return Err(DraftError::InsufficientPlayers { have, need });
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn settings(&self) -> &DraftSettings {
        &self.settings
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, team_index: usize) -> Option<&Team> {
        self.teams.get(team_index)
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn pick_index(&self) -> usize {
        self.pick_index
    }

    pub fn history(&self) -> &[PickRecord] {
        &self.history
    }

    pub fn total_picks(&self) -> usize {
        self.order.len()
    }

    pub fn remaining_picks(&self) -> usize {
        self.order.len() - self.pick_index
    }

    pub fn is_complete(&self) -> bool {
        self.pick_index == self.order.len()
    }

    /// Picks remain but nobody is left to pick.
    pub fn is_stalled(&self) -> bool {
        !self.is_complete() && self.available.is_empty()
    }

    /// The pick on the clock, or `None` once the draft is complete.
    pub fn current_slot(&self) -> Option<PickSlot> {
        let team_index = *self.order.get(self.pick_index)?;
        Some(PickSlot {
            pick_index: self.pick_index,
            pick_number: self.pick_index + 1,
            round: round_for_pick(self.pick_index, self.settings.num_teams),
            team_index,
            team_name: self.teams[team_index].name.clone(),
            role: self.role_at(self.pick_index),
        })
    }

    fn role_at(&self, pick_index: usize) -> Role {
        role_for_pick(
            pick_index,
            self.settings.num_teams,
            self.settings.starters_per_team,
        )
    }

    /// Export view of the rosters. Carries no pool, order, or history data.
    pub fn snapshot(&self) -> DraftSnapshot {
        DraftSnapshot {
            teams: self.teams.clone(),
        }
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Give `player` to the team on the clock.
    ///
    /// Everything is validated before anything changes, so a failed call
    /// leaves the state untouched.
    pub fn apply_pick(&mut self, player: &str) -> Result<PickRecord, DraftError> {
        let Some(&team_index) = self.order.get(self.pick_index) else {
            return Err(DraftError::DraftComplete);
        };
        let Some(pos) = self.available.iter().position(|p| p == player) else {
            return Err(DraftError::NotFound {
                query: player.to_string(),
            });
        };

        let role = self.role_at(self.pick_index);
        let player = self.available.remove(pos);
        self.teams[team_index].add_player(player.clone(), role);

        let record = PickRecord {
            pick_index: self.pick_index,
            team_index,
            player,
        };
        self.history.push(record.clone());
        self.pick_index += 1;

        debug!(
            "Pick {}: {} -> {} ({})",
            record.pick_index + 1,
            record.player,
            self.teams[team_index].name,
            role
        );
        Ok(record)
    }

    /// Resolve raw operator input (list number or name fragment) and pick.
    pub fn pick_by_input(&mut self, input: &str) -> Result<PickRecord, DraftError> {
        self.ensure_in_progress()?;
        let player = select::resolve_selection(&self.available, input)?;
        self.apply_pick(&player)
    }

    /// Pick the player at 1-based `number` in the available list.
    pub fn pick_by_number(&mut self, number: usize) -> Result<PickRecord, DraftError> {
        self.ensure_in_progress()?;
        let player = select::resolve_number(&self.available, number)?;
        self.apply_pick(&player)
    }

    /// Pick by exact or partial name, case-insensitively.
    pub fn pick_by_name(&mut self, name: &str) -> Result<PickRecord, DraftError> {
        self.ensure_in_progress()?;
        let player = select::resolve_name(&self.available, name)?;
        self.apply_pick(&player)
    }

    fn ensure_in_progress(&self) -> Result<(), DraftError> {
        if self.is_complete() {
            return Err(DraftError::DraftComplete);
        }
        Ok(())
    }

    /// Pick the front of the available list for the team on the clock.
    pub fn auto_pick_next(&mut self) -> Result<PickRecord, DraftError> {
        self.ensure_in_progress()?;
        let Some(player) = self.available.first().cloned() else {
            return Err(DraftError::PoolExhausted);
        };
        self.apply_pick(&player)
    }

    /// Auto-pick until the draft is complete or the pool runs dry.
    ///
    /// Running dry is not an error here; check [`DraftState::is_stalled`]
    /// afterwards. Returns the number of picks made.
    pub fn auto_complete_remaining(&mut self) -> usize {
        let mut made = 0;
        while self.auto_pick_next().is_ok() {
            made += 1;
        }

        if self.is_stalled() {
            warn!(
                "Auto-complete stalled at pick {}/{}: no players left",
                self.pick_index,
                self.order.len()
            );
        } else {
            info!("Auto-complete made {} picks; draft complete", made);
        }
        made
    }

    /// Revert the most recent pick.
    ///
    /// The player goes back to the **front** of the available list rather
    /// than to the position it was picked from, so it becomes the next
    /// auto-pick. Undoing several picks in a row therefore does not restore
    /// the original pool order beyond the latest reinsertion.
    pub fn undo_last(&mut self) -> Result<PickRecord, DraftError> {
        let Some(record) = self.history.pop() else {
            return Err(DraftError::NothingToUndo);
        };

        let role = self.role_at(record.pick_index);
        let team = &mut self.teams[record.team_index];
        if !team.remove_player(&record.player, role) {
            let err = DraftError::HistoryMismatch {
                player: record.player.clone(),
                team: team.name.clone(),
            };
            self.history.push(record);
            return Err(err);
        }

        self.available.insert(0, record.player.clone());
        self.pick_index = record.pick_index;

        debug!(
            "Undid pick {}: {} back to the pool",
            record.pick_index + 1,
            record.player
        );
        Ok(record)
    }
}

fn first_duplicate(players: &[String]) -> Option<String> {
    let mut seen = HashSet::with_capacity(players.len());
    players
        .iter()
        .find(|name| !seen.insert(name.as_str()))
        .cloned()
}
