//! Exact minimax over several agents.
//!
//! Agent 0 maximizes, every other agent minimizes, and they move in index
//! order. The look-ahead depth counts whole rounds: the maximizer and then
//! each minimizer once.

use super::super::interface::*;
use super::util::*;

use log::{debug, trace};

struct Search<'a, E> {
    max_depth: usize,
    eval: &'a E,
}

impl<'a, E> Search<'a, E> {
    fn max_value<S>(&self, depth: usize, state: &S) -> (Option<S::Action>, Evaluation)
    where
        S: GameState,
        E: Evaluator<S>,
    {
        if depth == self.max_depth || state.is_terminal() {
            return (None, self.eval.evaluate(state));
        }
        let num_agents = agent_count(state);
        let mut best = WORST_EVAL;
        let mut best_action = None;
        for action in state.legal_actions(0) {
            let child = state.generate_child(0, &action);
            let value = match next_minimizer(0, num_agents) {
                Some(agent) => self.min_value(depth, &child, agent),
                None => self.max_value(depth + 1, &child).1,
            };
            if improves_max(value, best) {
                best = value;
                best_action = Some(action);
            }
        }
        (best_action, best)
    }

    fn min_value<S>(&self, depth: usize, state: &S, agent: usize) -> Evaluation
    where
        S: GameState,
        E: Evaluator<S>,
    {
        if state.is_terminal() {
            return self.eval.evaluate(state);
        }
        let num_agents = agent_count(state);
        let mut best = BEST_EVAL;
        for action in state.legal_actions(agent) {
            let child = state.generate_child(agent, &action);
            let value = match next_minimizer(agent, num_agents) {
                Some(next) => self.min_value(depth, &child, next),
                None => self.max_value(depth + 1, &child).1,
            };
            if improves_min(value, best) {
                best = value;
            }
        }
        trace!("min agent {} at depth {} -> {}", agent, depth, best);
        best
    }
}

/// Search `max_depth` rounds ahead and return the maximizer's best move
/// along with the value of the root.
///
/// The move is `None` when the root is already decided, `max_depth` is 0,
/// or the maximizer has nothing to play.
pub fn minimax_search<S, E>(
    state: &S, max_depth: usize, eval: &E,
) -> (Option<S::Action>, Evaluation)
where
    S: GameState,
    E: Evaluator<S>,
{
    Search { max_depth, eval }.max_value(0, state)
}

/// The minimax move for agent 0.
pub fn minimax_decision<S, E>(state: &S, max_depth: usize, eval: &E) -> Option<S::Action>
where
    S: GameState,
    E: Evaluator<S>,
{
    minimax_search(state, max_depth, eval).0
}

/// A [`Strategy`] that plays agent 0 with plain minimax.
pub struct Minimax<E> {
    max_depth: usize,
    prev_value: Evaluation,
    eval: E,
}

impl<E> Minimax<E> {
    pub fn new(eval: E, depth: usize) -> Minimax<E> {
        Minimax { max_depth: depth, prev_value: 0.0, eval }
    }

    /// Value of the root found by the last `choose_move`.
    pub fn root_value(&self) -> Evaluation {
        self.prev_value
    }
}

impl<S, E> Strategy<S> for Minimax<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn choose_move(&mut self, state: &S, agent: usize) -> Option<S::Action> {
        assert_eq!(agent, 0, "minimax only plays the maximizing agent");
        let (action, value) = minimax_search(state, self.max_depth, &self.eval);
        debug!("minimax: depth {} root value {}", self.max_depth, value);
        self.prev_value = value;
        action
    }
}
