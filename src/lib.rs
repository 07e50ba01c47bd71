//! Generic state-space search.
//!
//! Two independent engines share the traits in [`interface`]:
//!
//! * graph search ([`search`]) finds a sequence of actions from a
//!   [`Problem`]'s start state to a goal, depth-first, breadth-first or A*;
//! * adversarial search ([`strategies`]) picks the move for agent 0 of a
//!   multi-agent [`GameState`] with minimax or alpha-beta, assuming every
//!   other agent plays against it.

pub mod agents;
pub mod error;
pub mod interface;
pub mod options;
pub mod search;
pub mod strategies;
pub mod util;

pub use agents::{score_evaluation, Evaluators, Heuristics, SearchAgent, SearchFunction};
pub use error::Error;
pub use interface::*;
pub use options::{AgentOptions, SearchOptions};
pub use search::{
    a_star_search, breadth_first_search, depth_first_search, null_heuristic, uniform_cost_search,
};
pub use strategies::alphabeta::{alpha_beta_decision, AlphaBeta};
pub use strategies::minimax::{minimax_decision, Minimax};
pub use strategies::random::Random;
