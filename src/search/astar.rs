//! A* best-first search.
//!
//! The frontier is keyed by `g + h`. Unlike depth-first and breadth-first
//! search, a state is only marked explored once it is popped; until then a
//! cheaper path to it can still replace the one on record.

use super::frontier::PriorityQueue;
use crate::interface::{Cost, Heuristic, Problem};

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

/// The trivial heuristic: every state is estimated to be a goal.
pub fn null_heuristic<P: Problem>(_state: &P::State, _problem: &P) -> Cost {
    0.0
}

/// A* with the null heuristic, i.e. uniform-cost search.
pub fn uniform_cost_search<P: Problem>(problem: &P) -> Vec<P::Action> {
    a_star_search(problem, null_heuristic::<P>)
}

/// Search the node that has the lowest combined cost and heuristic first.
///
/// Returns an empty sequence if no goal is reachable.
pub fn a_star_search<P, H>(problem: &P, heuristic: H) -> Vec<P::Action>
where
    P: Problem,
    H: Heuristic<P>,
{
    let mut explored = FxHashSet::default();
    // Best known path and its cost, for every state still in the frontier.
    let mut best: FxHashMap<P::State, (Vec<P::Action>, Cost)> = FxHashMap::default();
    let mut frontier = PriorityQueue::new();

    let start = problem.start_state();
    frontier.push(start.clone(), heuristic.estimate(&start, problem));
    best.insert(start, (Vec::new(), 0.0));

    let mut expanded = 0usize;
    while let Some((state, _)) = frontier.pop() {
        let Some((actions, path_cost)) = best.remove(&state) else {
            unreachable!("queued state has no path record");
        };
        if problem.is_goal_state(&state) {
            debug!(
                "astar: found a {}-step solution of cost {} after expanding {} nodes",
                actions.len(),
                path_cost,
                expanded
            );
            return actions;
        }
        explored.insert(state.clone());
        expanded += 1;

        for successor in problem.expand(&state) {
            if explored.contains(&successor.state) {
                continue;
            }
            let cost = path_cost + successor.cost;
            match best.get_mut(&successor.state) {
                Some(record) => {
                    if cost < record.1 {
                        let priority = cost + heuristic.estimate(&successor.state, problem);
                        frontier.decrease_priority(&successor.state, priority);
                        let mut path = actions.clone();
                        path.push(successor.action);
                        *record = (path, cost);
                    }
                }
                None => {
                    let priority = cost + heuristic.estimate(&successor.state, problem);
                    let mut path = actions.clone();
                    path.push(successor.action);
                    frontier.push(successor.state.clone(), priority);
                    best.insert(successor.state, (path, cost));
                }
            }
        }
        trace!(
            "astar: expanded node #{} at cost {}, {} queued",
            expanded,
            path_cost,
            frontier.len()
        );
    }

    debug!("astar: no solution after expanding {} nodes", expanded);
    Vec::new()
}
