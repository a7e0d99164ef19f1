// Snake pick order and round/role arithmetic.
//
// Everything here is a pure function of the pick index and the static draft
// settings. `DraftState` computes the order once at construction and derives
// the team and role for each pick from these helpers, so they can never drift.

use super::pick::Role;

/// Build the full pick schedule for `rounds` rounds of `num_teams` teams.
///
/// Even rounds (0-based) run `0..num_teams` ascending, odd rounds run it
/// descending, so the team that picks last in one round picks first in the
/// next.
pub fn generate_order(num_teams: usize, rounds: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(num_teams * rounds);
    for round in 0..rounds {
        if round % 2 == 0 {
            order.extend(0..num_teams);
        } else {
            order.extend((0..num_teams).rev());
        }
    }
    order
}

/// 1-based round number for a 0-based pick index.
///
/// Returns 0 when `num_teams` is 0; such a draft has no picks to ask about.
pub fn round_for_pick(pick_index: usize, num_teams: usize) -> usize {
    if num_teams == 0 {
        return 0;
    }
    pick_index / num_teams + 1
}

/// The roster role filled by the pick at `pick_index`.
///
/// Rounds `1..=starters_per_team` fill starters; every later round fills
/// reserves.
pub fn role_for_pick(pick_index: usize, num_teams: usize, starters_per_team: usize) -> Role {
    if round_for_pick(pick_index, num_teams) <= starters_per_team {
        Role::Starter
    } else {
        Role::Reserve
    }
}
