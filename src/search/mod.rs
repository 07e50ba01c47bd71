//! Single-agent graph search over a [`Problem`](crate::interface::Problem).
//!
//! All three searches return the actions leading from the start state to
//! the first goal state they pop, or an empty sequence when the reachable
//! state space runs out first.

pub mod astar;
pub mod frontier;
pub mod uninformed;

pub use self::astar::{a_star_search, null_heuristic, uniform_cost_search};
pub use self::uninformed::{breadth_first_search, depth_first_search};
