// Integration tests for the snake draft engine.
//
// These drive the public API end to end: full drafts at the default league
// size, the small four-player scenario, stalls, and property tests that check
// the pool/roster invariants under random sequences of operations.

use std::collections::HashSet;

use proptest::prelude::*;

use snake_draft_core::draft::order::{generate_order, role_for_pick};
use snake_draft_core::draft::{DraftError, DraftSettings, DraftState, Role};
use snake_draft_core::export::board_json;
use snake_draft_core::players::default_players;

// ===========================================================================
// Test helpers
// ===========================================================================

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn two_by_one_one() -> DraftSettings {
    DraftSettings {
        num_teams: 2,
        starters_per_team: 1,
        reserves_per_team: 1,
    }
}

/// Every player is either available or on exactly one roster list, and
/// nothing else is anywhere.
fn assert_invariants(state: &DraftState) {
    let mut seen = HashSet::new();
    for p in state.available() {
        assert!(seen.insert(p.clone()), "{p} listed twice");
    }
    for team in state.teams() {
        for p in team.starters.iter().chain(&team.reserves) {
            assert!(seen.insert(p.clone()), "{p} listed twice");
        }
    }
    let all: HashSet<String> = state.players().iter().cloned().collect();
    assert_eq!(seen, all);
    assert_eq!(state.history().len(), state.pick_index());
    assert!(state.pick_index() <= state.order().len());
}

// ===========================================================================
// Scenarios
// ===========================================================================

#[test]
fn four_player_scenario_end_to_end() {
    let mut state = DraftState::new(names(&["A", "B", "C", "D"]), &two_by_one_one()).unwrap();
    assert_eq!(state.order(), &[0, 1, 1, 0]);

    for _ in 0..4 {
        state.auto_pick_next().unwrap();
        assert_invariants(&state);
    }

    let teams = state.teams();
    assert_eq!(teams[0].starters, vec!["A"]);
    assert_eq!(teams[1].starters, vec!["B"]);
    assert_eq!(teams[1].reserves, vec!["C"]);
    assert_eq!(teams[0].reserves, vec!["D"]);
    assert!(state.available().is_empty());
    assert_eq!(state.pick_index(), 4);
    assert!(state.is_complete());

    state.undo_last().unwrap();
    assert_eq!(state.available(), &names(&["D"])[..]);
    assert!(state.teams()[0].reserves.is_empty());
    assert_eq!(state.pick_index(), 3);
    assert_invariants(&state);
}

#[test]
fn default_league_full_auto_draft() {
    let settings = DraftSettings::default();
    let players = default_players(settings.total_picks());
    let mut state = DraftState::new(players, &settings).unwrap();
    assert!(state.check_pool_size().is_ok());

    assert_eq!(state.auto_complete_remaining(), 63);
    assert!(state.is_complete());
    assert_invariants(&state);

    for team in state.teams() {
        assert_eq!(team.starters.len(), 5, "{}", team.name);
        assert_eq!(team.reserves.len(), 2, "{}", team.name);
    }
    // Round 1 ascending, round 2 descending.
    assert_eq!(state.teams()[0].starters[0], "Player 1");
    assert_eq!(state.teams()[8].starters[0], "Player 9");
    assert_eq!(state.teams()[8].starters[1], "Player 10");
    assert_eq!(state.teams()[0].starters[1], "Player 18");
    // Round 7 runs ascending again, so team 9 makes the last pick.
    assert_eq!(state.teams()[8].reserves[1], "Player 63");
}

#[test]
fn interleaved_manual_picks_and_undo() {
    let settings = DraftSettings {
        num_teams: 3,
        starters_per_team: 2,
        reserves_per_team: 1,
    };
    let players = names(&[
        "Aaron Judge",
        "Juan Soto",
        "Mookie Betts",
        "Jose Ramirez",
        "Bobby Witt Jr.",
        "Shohei Ohtani",
        "Corbin Carroll",
        "Julio Rodriguez",
        "Gunnar Henderson",
        "Yordan Alvarez",
    ]);
    let mut state = DraftState::new(players, &settings).unwrap();

    state.pick_by_input("ohtani").unwrap();
    state.pick_by_input("2").unwrap();
    assert!(matches!(
        state.pick_by_input("ju"),
        Err(DraftError::Ambiguous { .. })
    ));
    state.pick_by_input("JULIO RODRIGUEZ").unwrap();
    assert_invariants(&state);

    // Round 2 reverses: team 3 picks again.
    let slot = state.current_slot().unwrap();
    assert_eq!(slot.team_index, 2);
    assert_eq!(slot.round, 2);
    assert_eq!(slot.role, Role::Starter);

    state.undo_last().unwrap();
    state.undo_last().unwrap();
    assert_eq!(state.pick_index(), 1);
    assert_eq!(state.available()[0], "Juan Soto");
    assert_eq!(state.available()[1], "Julio Rodriguez");
    assert_invariants(&state);

    let made = state.auto_complete_remaining();
    assert_eq!(made, 8);
    assert!(state.is_complete());
    assert_eq!(state.available().len(), 1);
    assert_invariants(&state);
}

#[test]
fn short_pool_stalls_then_recovers_by_undo() {
    let players = names(&["A", "B", "C"]);
    let mut state = DraftState::new(players, &two_by_one_one()).unwrap();
    assert_eq!(
        state.check_pool_size(),
        Err(DraftError::InsufficientPlayers { have: 3, need: 4 })
    );

    state.auto_complete_remaining();
    assert!(state.is_stalled());
    assert_eq!(state.pick_index(), 3);
    assert_eq!(state.auto_pick_next(), Err(DraftError::PoolExhausted));

    state.undo_last().unwrap();
    assert!(!state.is_stalled());
    assert_eq!(state.available(), &names(&["C"])[..]);
    assert_invariants(&state);
}

#[test]
fn export_after_partial_draft() {
    let mut state = DraftState::new(names(&["A", "B", "C", "D"]), &two_by_one_one()).unwrap();
    state.auto_pick_next().unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&board_json(&state.snapshot()).unwrap()).unwrap();
    assert_eq!(json.as_object().unwrap().len(), 1);
    assert_eq!(json["teams"][0]["starters"][0], "A");
    assert_eq!(json["teams"][1]["name"], "Team 2");
}

// ===========================================================================
// Properties
// ===========================================================================

#[derive(Debug, Clone)]
enum Op {
    Auto,
    Undo,
    Number(usize),
    Name(String),
    Finish,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => Just(Op::Auto),
        3 => Just(Op::Undo),
        3 => (0usize..30).prop_map(Op::Number),
        2 => "[a-z0-9 ]{0,4}".prop_map(Op::Name),
        1 => Just(Op::Finish),
    ]
}

proptest! {
    #[test]
    fn order_rounds_alternate(num_teams in 1usize..16, rounds in 0usize..12) {
        let order = generate_order(num_teams, rounds);
        prop_assert_eq!(order.len(), num_teams * rounds);
        for (r, chunk) in order.chunks(num_teams).enumerate() {
            let ascending: Vec<usize> = (0..num_teams).collect();
            if r % 2 == 0 {
                prop_assert_eq!(chunk, &ascending[..]);
            } else {
                let descending: Vec<usize> = ascending.into_iter().rev().collect();
                prop_assert_eq!(chunk, &descending[..]);
            }
        }
    }

    #[test]
    fn role_matches_round_boundaries(
        num_teams in 1usize..12,
        starters in 0usize..6,
        reserves in 0usize..6,
    ) {
        let total = num_teams * (starters + reserves);
        for pick in 0..total {
            let expected = if pick < num_teams * starters { Role::Starter } else { Role::Reserve };
            prop_assert_eq!(role_for_pick(pick, num_teams, starters), expected);
        }
    }

    #[test]
    fn invariants_hold_under_random_ops(
        num_teams in 1usize..5,
        starters in 0usize..3,
        reserves in 0usize..3,
        pool_size in 0usize..20,
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let settings = DraftSettings { num_teams, starters_per_team: starters, reserves_per_team: reserves };
        let mut state = DraftState::new(default_players(pool_size), &settings).unwrap();

        for op in ops {
            let before = state.clone();
            let result = match op {
                Op::Auto => state.auto_pick_next().map(|_| ()),
                Op::Undo => state.undo_last().map(|_| ()),
                Op::Number(n) => state.pick_by_number(n).map(|_| ()),
                Op::Name(q) => state.pick_by_name(&q).map(|_| ()),
                Op::Finish => {
                    state.auto_complete_remaining();
                    Ok(())
                }
            };

            if result.is_err() {
                // Failed operations leave everything untouched.
                prop_assert_eq!(state.available(), before.available());
                prop_assert_eq!(state.teams(), before.teams());
                prop_assert_eq!(state.pick_index(), before.pick_index());
            }
            assert_invariants(&state);
        }
    }

    #[test]
    fn pick_then_undo_round_trips(
        pool_size in 4usize..20,
        warmup in 0usize..4,
        choice in 1usize..4,
    ) {
        let settings = DraftSettings { num_teams: 2, starters_per_team: 2, reserves_per_team: 2 };
        let mut state = DraftState::new(default_players(pool_size), &settings).unwrap();
        for _ in 0..warmup {
            state.auto_pick_next().unwrap();
        }
        // Picking the front player makes undo restore the exact pool order.
        let before = state.clone();
        state.pick_by_number(1).unwrap();
        state.undo_last().unwrap();
        prop_assert_eq!(state.available(), before.available());
        prop_assert_eq!(state.teams(), before.teams());
        prop_assert_eq!(state.pick_index(), before.pick_index());

        // Any other position comes back at the front instead.
        let n = choice.min(state.available().len());
        let picked = state.pick_by_number(n).unwrap().player;
        state.undo_last().unwrap();
        prop_assert_eq!(&state.available()[0], &picked);
        prop_assert_eq!(state.teams(), before.teams());
        prop_assert_eq!(state.pick_index(), before.pick_index());
    }
}
