use super::super::interface::*;

/// Number of agents taking part in `state`'s game.
///
/// A game without a maximizer is a broken `GameState` implementation.
pub(super) fn agent_count<S: GameState>(state: &S) -> usize {
    let n = state.num_agents();
    assert!(n >= 1, "GameState::num_agents() must be at least 1, got {}", n);
    n
}

/// The minimizer that moves after `agent`, or `None` once every agent has
/// moved and the round is over.
pub(super) fn next_minimizer(agent: usize, num_agents: usize) -> Option<usize> {
    if agent + 1 < num_agents {
        Some(agent + 1)
    } else {
        None
    }
}

// Keep the first of equally good moves: a later move has to be strictly
// better to replace it.
pub(super) fn improves_max(value: Evaluation, best: Evaluation) -> bool {
    value > best
}

pub(super) fn improves_min(value: Evaluation, best: Evaluation) -> bool {
    value < best
}
