//! Property tests for the state-machine invariants: strict alternation,
//! zero-sum terminal payoffs, idempotent legal-action enumeration,
//! clone/replay equivalence, and the termination bound.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hsr_engine::{GameState, ADJUDICATOR, GUESSER, NUM_QUESTIONS};

/// Longest possible game: the question budget strictly decreases on every
/// confirmation, so play cannot outlast this many plies.
const MAX_PLIES: u32 = 2 * NUM_QUESTIONS + 1;

/// Drive a playout, choosing each ply by indexing the legal set with the
/// next element of `choices`. Stops at terminal, or when the Guesser has
/// no unmarked rung left (reachable without being terminal), or when the
/// choices run out.
fn playout(choices: &[usize]) -> (GameState, u32) {
    let mut state = GameState::new();
    let mut plies = 0;

    for &choice in choices {
        if state.is_terminal() {
            break;
        }
        let actions = state.legal_actions();
        if actions.is_empty() {
            break;
        }
        state.apply_action(actions[choice % actions.len()]);
        plies += 1;
    }

    (state, plies)
}

proptest! {
    #[test]
    fn prop_players_alternate_until_terminal(choices in prop::collection::vec(0usize..64, 0..16)) {
        let mut state = GameState::new();
        let mut expected = GUESSER;

        for &choice in &choices {
            if state.is_terminal() {
                break;
            }
            let actions = state.legal_actions();
            if actions.is_empty() {
                break;
            }
            prop_assert_eq!(state.current_player(), Some(expected));
            state.apply_action(actions[choice % actions.len()]);
            expected = expected.opponent();
        }
    }

    #[test]
    fn prop_terminal_payoffs_are_zero_sum(choices in prop::collection::vec(0usize..64, 0..16)) {
        let (state, _) = playout(&choices);
        if state.is_terminal() {
            let [p0, p1] = state.returns();
            prop_assert_eq!(p0 + p1, 0.0);
            prop_assert_eq!(p0.abs(), 1.0);
        } else {
            prop_assert_eq!(state.returns(), [0.0, 0.0]);
        }
    }

    #[test]
    fn prop_legal_actions_idempotent(choices in prop::collection::vec(0usize..64, 0..16)) {
        let (state, _) = playout(&choices);
        prop_assert_eq!(state.legal_actions(), state.legal_actions());
        prop_assert_eq!(state.legal_action_ids(), state.legal_action_ids());
    }

    #[test]
    fn prop_clone_replay_matches(
        prefix in prop::collection::vec(0usize..64, 0..8),
        suffix in prop::collection::vec(0usize..64, 0..8),
    ) {
        let (mut original, _) = playout(&prefix);
        let mut replica = original.clone();

        for &choice in &suffix {
            if original.is_terminal() {
                break;
            }
            let actions = original.legal_actions();
            if actions.is_empty() {
                break;
            }
            let action = actions[choice % actions.len()];
            original.apply_action(action);
            replica.apply_action(action);
        }

        prop_assert_eq!(original.to_string(), replica.to_string());
        prop_assert_eq!(original.history_ids(), replica.history_ids());
        prop_assert_eq!(original.is_terminal(), replica.is_terminal());
        prop_assert_eq!(original.returns(), replica.returns());
    }

    #[test]
    fn prop_playouts_respect_termination_bound(choices in prop::collection::vec(0usize..64, 0..64)) {
        let (state, plies) = playout(&choices);
        prop_assert!(plies <= MAX_PLIES);
        // A playout that was not cut short by the choice budget either
        // ended or stranded the Guesser without an unmarked rung.
        if choices.len() as u32 > plies {
            prop_assert!(state.is_terminal() || state.legal_actions().is_empty());
        }
    }

    #[test]
    fn prop_history_grows_one_per_ply(choices in prop::collection::vec(0usize..64, 0..16)) {
        let (state, plies) = playout(&choices);
        prop_assert_eq!(state.history().len() as u32, plies);
    }
}

#[test]
fn test_seeded_random_playouts_always_finish() {
    // Random play over many seeds: every game ends within the bound, and
    // whenever it ends there is a winner (no draws exist).
    let mut terminal_games = 0;

    for seed in 0..200u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::new();
        let mut plies = 0;

        loop {
            if state.is_terminal() {
                terminal_games += 1;
                let [p0, p1] = state.returns();
                assert_eq!(p0 + p1, 0.0, "seed {seed}: payoffs not zero-sum");
                break;
            }
            let actions = state.legal_actions();
            if actions.is_empty() {
                // Board exhausted mid-game; the host would stop here.
                break;
            }
            let pick = rng.gen_range(0..actions.len());
            state.apply_action(actions[pick]);
            plies += 1;
            assert!(plies <= MAX_PLIES, "seed {seed}: game ran past the bound");
        }

        assert!(state.outcome() != Some(GUESSER) || state.returns() == [1.0, -1.0]);
        assert!(state.outcome() != Some(ADJUDICATOR) || state.returns() == [-1.0, 1.0]);
    }

    // Random play reaches a decided game most of the time.
    assert!(terminal_games > 100, "only {terminal_games} of 200 games ended");
}
