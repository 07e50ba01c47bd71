//! Minimax with alpha-beta pruning.
//!
//! Returns the same root value as [`minimax`](super::minimax) for every
//! depth. Pruning is strict: a max node stops once its best value exceeds
//! beta and a min node stops once its best value drops below alpha, so
//! siblings that merely tie the bound are still searched.

use super::super::interface::*;
use super::util::*;

use log::{debug, trace};

struct Search<'a, E> {
    max_depth: usize,
    eval: &'a E,
}

impl<'a, E> Search<'a, E> {
    fn max_value<S>(
        &self, depth: usize, state: &S, mut alpha: Evaluation, beta: Evaluation,
    ) -> (Option<S::Action>, Evaluation)
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
                Some(agent) => self.min_value(depth, &child, agent, alpha, beta),
                None => self.max_value(depth + 1, &child, alpha, beta).1,
            };
            if improves_max(value, best) {
                best = value;
                best_action = Some(action);
            }
            if best > beta {
                trace!("max cutoff at depth {}: {} > beta {}", depth, best, beta);
                return (best_action, best);
            }
            if best > alpha {
                alpha = best;
            }
        }
        (best_action, best)
    }

    fn min_value<S>(
        &self, depth: usize, state: &S, agent: usize, alpha: Evaluation, mut beta: Evaluation,
    ) -> Evaluation
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
                Some(next) => self.min_value(depth, &child, next, alpha, beta),
                None => self.max_value(depth + 1, &child, alpha, beta).1,
            };
            if improves_min(value, best) {
                best = value;
            }
            if best < alpha {
                trace!(
                    "min cutoff for agent {} at depth {}: {} < alpha {}",
                    agent,
                    depth,
                    best,
                    alpha
                );
                return best;
            }
            if best < beta {
                beta = best;
            }
        }
        best
    }
}

/// Search `max_depth` rounds ahead with alpha-beta pruning and return the
/// maximizer's best move along with the value of the root.
pub fn alpha_beta_search<S, E>(
    state: &S, max_depth: usize, eval: &E,
) -> (Option<S::Action>, Evaluation)
where
    S: GameState,
    E: Evaluator<S>,
{
    Search { max_depth, eval }.max_value(0, state, WORST_EVAL, BEST_EVAL)
}

/// The alpha-beta move for agent 0.
pub fn alpha_beta_decision<S, E>(state: &S, max_depth: usize, eval: &E) -> Option<S::Action>
where
    S: GameState,
    E: Evaluator<S>,
{
    alpha_beta_search(state, max_depth, eval).0
}

/// A [`Strategy`] that plays agent 0 with alpha-beta search.
pub struct AlphaBeta<E> {
    max_depth: usize,
    prev_value: Evaluation,
    eval: E,
}

impl<E> AlphaBeta<E> {
    pub fn new(eval: E, depth: usize) -> AlphaBeta<E> {
        AlphaBeta { max_depth: depth, prev_value: 0.0, eval }
    }

    #[doc(hidden)]
    pub fn root_value(&self) -> Evaluation {
        self.prev_value
    }
}

impl<S, E> Strategy<S> for AlphaBeta<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn choose_move(&mut self, state: &S, agent: usize) -> Option<S::Action> {
        assert_eq!(agent, 0, "alpha-beta only plays the maximizing agent");
        let (action, value) = alpha_beta_search(state, self.max_depth, &self.eval);
        debug!("alphabeta: depth {} root value {}", self.max_depth, value);
        self.prev_value = value;
        action
    }
}
