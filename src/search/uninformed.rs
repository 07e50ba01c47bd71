//! Depth-first and breadth-first graph search.
//!
//! Both mark a state as seen when it is pushed, not when it is popped, so no
//! state is ever queued twice. The start state counts as seen from the
//! outset. With non-unit step costs neither variant promises anything about
//! the cost of the path it returns.

use super::frontier::{Frontier, Queue, Stack};
use crate::interface::Problem;

use log::{debug, trace};
use rustc_hash::FxHashSet;

// A queued state together with the actions that reached it.
type Node<P> = (<P as Problem>::State, Vec<<P as Problem>::Action>);

/// Search the deepest nodes in the search tree first.
pub fn depth_first_search<P: Problem>(problem: &P) -> Vec<P::Action> {
    graph_search::<P, Stack<Node<P>>>(problem, "dfs")
}

/// Search the shallowest nodes in the search tree first.
pub fn breadth_first_search<P: Problem>(problem: &P) -> Vec<P::Action> {
    graph_search::<P, Queue<Node<P>>>(problem, "bfs")
}

fn graph_search<P, F>(problem: &P, name: &str) -> Vec<P::Action>
where
    P: Problem,
    F: Frontier<Node<P>>,
{
    let start = problem.start_state();
    let mut seen = FxHashSet::default();
    seen.insert(start.clone());
    let mut frontier = F::default();
    frontier.push((start, Vec::new()));

    let mut expanded = 0usize;
    while let Some((state, actions)) = frontier.pop() {
        if problem.is_goal_state(&state) {
            debug!(
                "{}: found a {}-step solution after expanding {} nodes",
                name,
                actions.len(),
                expanded
            );
            return actions;
        }
        expanded += 1;
        for successor in problem.expand(&state) {
            if seen.contains(&successor.state) {
                continue;
            }
            seen.insert(successor.state.clone());
            let mut path = actions.clone();
            path.push(successor.action);
            frontier.push((successor.state, path));
        }
        trace!("{}: expanded node #{}, {} states seen", name, expanded, seen.len());
    }

    debug!("{}: no solution after expanding {} nodes", name, expanded);
    Vec::new()
}
