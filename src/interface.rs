//! The common structures and traits.

use std::hash::Hash;

/// An assessment of a game state from the perspective of the maximizing
/// agent (index 0). Higher values mean a more favorable state.
pub type Evaluation = f64;

/// Accumulated cost of a path through a search problem.
pub type Cost = f64;

/// No real evaluation can be better than this.
pub const BEST_EVAL: Evaluation = f64::INFINITY;
/// No real evaluation can be worse than this.
pub const WORST_EVAL: Evaluation = f64::NEG_INFINITY;

/// One edge out of a state: the child it leads to, the action that labels
/// it, and the (non-negative) cost of taking it.
#[derive(Clone, Debug, PartialEq)]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: Cost,
}

impl<S, A> Successor<S, A> {
    pub fn new(state: S, action: A, cost: Cost) -> Self {
        Successor { state, action, cost }
    }
}

/// Defines a single-agent search problem.
///
/// States are compared and hashed to detect duplicates, so two states that
/// describe the same configuration must be equal.
pub trait Problem {
    /// The type of search states.
    type State: Clone + Eq + Hash;
    /// The type of the labels on the edges between states.
    type Action: Clone;

    /// The state the search begins from.
    fn start_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// All transitions out of `state`.
    fn expand(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of taking `actions` from the start state, or `None` if the
    /// sequence contains a move that isn't legal where it's taken.
    ///
    /// The default replays the sequence through `expand`. None of the search
    /// routines call this.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Option<Cost>
    where
        Self::Action: PartialEq,
    {
        let mut state = self.start_state();
        let mut total = 0.0;
        for action in actions {
            let next = self.expand(&state).into_iter().find(|s| s.action == *action)?;
            total += next.cost;
            state = next.state;
        }
        Some(total)
    }
}

/// Estimates the remaining cost from a state to the nearest goal.
///
/// A* is only guaranteed to find a cheapest path when the estimate never
/// exceeds the true cost.
pub trait Heuristic<P: Problem> {
    fn estimate(&self, state: &P::State, problem: &P) -> Cost;
}

impl<P, F> Heuristic<P> for F
where
    P: Problem,
    F: Fn(&P::State, &P) -> Cost,
{
    fn estimate(&self, state: &P::State, problem: &P) -> Cost {
        self(state, problem)
    }
}

/// Defines the rules of a multi-agent, turn-based game.
///
/// Agent 0 is the maximizer; agents `1..num_agents()` move after it in
/// increasing index order, each trying to minimize agent 0's evaluation.
pub trait GameState: Sized {
    /// The type of game moves.
    type Action: Clone;

    /// Moves available to `agent` in this state.
    fn legal_actions(&self, agent: usize) -> Vec<Self::Action>;

    /// The state after `agent` plays `action`.
    fn generate_child(&self, agent: usize, action: &Self::Action) -> Self;

    /// Total number of agents, including the maximizer.
    fn num_agents(&self) -> usize;

    /// Whether the maximizer has won.
    fn is_win(&self) -> bool;

    /// Whether the maximizer has lost.
    fn is_lose(&self) -> bool;

    /// Whether the game is decided either way.
    fn is_terminal(&self) -> bool {
        self.is_win() || self.is_lose()
    }
}

/// Game states that carry their own running score.
pub trait Scored {
    fn score(&self) -> Evaluation;
}

/// Evaluates a game's positions.
pub trait Evaluator<S> {
    /// Evaluate `state` from the perspective of agent 0.
    fn evaluate(&self, state: &S) -> Evaluation;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S) -> Evaluation,
{
    fn evaluate(&self, state: &S) -> Evaluation {
        self(state)
    }
}

/// Defines a method of choosing a move for an agent.
pub trait Strategy<S: GameState> {
    /// Pick a move for `agent` in `state`, or `None` if it has nothing to
    /// play.
    fn choose_move(&mut self, state: &S, agent: usize) -> Option<S::Action>;
}
