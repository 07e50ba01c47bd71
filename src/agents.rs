//! Agents assembled from named parts.
//!
//! A path-finding agent is a search function plus, for A*, a heuristic; an
//! adversarial agent is a search depth plus an evaluation function. The
//! registries here map the names used in [`options`](crate::options) to the
//! functions themselves.

use crate::error::{Error, Result};
use crate::interface::*;
use crate::options::{AgentOptions, SearchOptions};
use crate::search::{a_star_search, breadth_first_search, depth_first_search, null_heuristic};
use crate::strategies::alphabeta::AlphaBeta;
use crate::strategies::minimax::Minimax;

use log::debug;
use rustc_hash::FxHashMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// The default evaluation: the state's own score.
pub fn score_evaluation<S: Scored>(state: &S) -> Evaluation {
    state.score()
}

/// The graph searches, by name.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SearchFunction {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    AStar,
}

const SEARCH_FUNCTION_NAMES: &str = "dfs, depthFirstSearch, bfs, breadthFirstSearch, ucs, \
                                     uniformCostSearch, astar, aStarSearch";

impl FromStr for SearchFunction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dfs" | "depthFirstSearch" => Ok(SearchFunction::DepthFirst),
            "bfs" | "breadthFirstSearch" => Ok(SearchFunction::BreadthFirst),
            "ucs" | "uniformCostSearch" => Ok(SearchFunction::UniformCost),
            "astar" | "aStarSearch" => Ok(SearchFunction::AStar),
            _ => Err(Error::UnknownSearchFunction {
                name: s.to_string(),
                expected: SEARCH_FUNCTION_NAMES.to_string(),
            }),
        }
    }
}

impl fmt::Display for SearchFunction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            SearchFunction::DepthFirst => "dfs",
            SearchFunction::BreadthFirst => "bfs",
            SearchFunction::UniformCost => "ucs",
            SearchFunction::AStar => "astar",
        };
        f.pad(name)
    }
}

impl SearchFunction {
    /// Whether this search makes use of a heuristic.
    pub fn takes_heuristic(&self) -> bool {
        *self == SearchFunction::AStar
    }

    /// Run the search. The heuristic is ignored by everything but A*.
    pub fn run<P, H>(&self, problem: &P, heuristic: H) -> Vec<P::Action>
    where
        P: Problem,
        H: Heuristic<P>,
    {
        match *self {
            SearchFunction::DepthFirst => depth_first_search(problem),
            SearchFunction::BreadthFirst => breadth_first_search(problem),
            SearchFunction::UniformCost => a_star_search(problem, null_heuristic::<P>),
            SearchFunction::AStar => a_star_search(problem, heuristic),
        }
    }
}

// Sorted, so that error messages don't depend on hash order.
fn registered_names<V>(table: &FxHashMap<String, V>) -> String {
    let mut names: Vec<&str> = table.keys().map(String::as_str).collect();
    names.sort_unstable();
    names.join(", ")
}

type HeuristicFn<P> = dyn Fn(&<P as Problem>::State, &P) -> Cost;

/// Named heuristics for one kind of problem. `nullHeuristic` is always
/// present.
pub struct Heuristics<P: Problem> {
    table: FxHashMap<String, Rc<HeuristicFn<P>>>,
}

impl<P: Problem + 'static> Heuristics<P> {
    pub fn new() -> Self {
        let mut heuristics = Heuristics { table: FxHashMap::default() };
        heuristics.register("nullHeuristic", null_heuristic::<P>);
        heuristics.register("null", null_heuristic::<P>);
        heuristics
    }

    pub fn register<F>(&mut self, name: &str, heuristic: F)
    where
        F: Fn(&P::State, &P) -> Cost + 'static,
    {
        self.table.insert(name.to_string(), Rc::new(heuristic));
    }

    pub fn get(&self, name: &str) -> Result<Rc<HeuristicFn<P>>> {
        self.table.get(name).cloned().ok_or_else(|| Error::UnknownHeuristic {
            name: name.to_string(),
            expected: registered_names(&self.table),
        })
    }
}

impl<P: Problem + 'static> Default for Heuristics<P> {
    fn default() -> Self {
        Heuristics::new()
    }
}

/// Finds a path through a problem with a configured search.
pub struct SearchAgent<P: Problem> {
    function: SearchFunction,
    heuristic: Rc<HeuristicFn<P>>,
}

impl<P: Problem + 'static> SearchAgent<P> {
    pub fn new(function: SearchFunction) -> Self {
        SearchAgent { function, heuristic: Rc::new(null_heuristic::<P>) }
    }

    /// Resolve the names in `options`. Naming a heuristic for a search that
    /// doesn't use one is an error.
    pub fn from_options(options: &SearchOptions, heuristics: &Heuristics<P>) -> Result<Self> {
        let function: SearchFunction = options.function().parse()?;
        let heuristic = match options.heuristic() {
            Some(_) if !function.takes_heuristic() => {
                return Err(Error::UnexpectedHeuristic { name: function.to_string() })
            }
            Some(name) => heuristics.get(name)?,
            None => heuristics.get("nullHeuristic")?,
        };
        debug!("search agent: {} with heuristic {:?}", function, options.heuristic());
        Ok(SearchAgent { function, heuristic })
    }

    pub fn function(&self) -> SearchFunction {
        self.function
    }

    /// The actions from `problem`'s start state to a goal, or an empty
    /// sequence if there is none.
    pub fn find_path(&self, problem: &P) -> Vec<P::Action> {
        self.function.run(problem, &*self.heuristic)
    }
}

/// An evaluation function looked up by name.
pub struct NamedEvaluator<S> {
    name: String,
    eval: Rc<dyn Fn(&S) -> Evaluation>,
}

impl<S> NamedEvaluator<S> {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<S> Clone for NamedEvaluator<S> {
    fn clone(&self) -> Self {
        NamedEvaluator { name: self.name.clone(), eval: self.eval.clone() }
    }
}

impl<S> Evaluator<S> for NamedEvaluator<S> {
    fn evaluate(&self, state: &S) -> Evaluation {
        (self.eval)(state)
    }
}

/// Named evaluation functions for one kind of game state.
pub struct Evaluators<S> {
    table: FxHashMap<String, Rc<dyn Fn(&S) -> Evaluation>>,
}

impl<S: 'static> Evaluators<S> {
    /// An empty registry.
    pub fn new() -> Self {
        Evaluators { table: FxHashMap::default() }
    }

    /// A registry holding `score` (alias `scoreEvaluationFunction`).
    pub fn with_score() -> Self
    where
        S: Scored,
    {
        let mut evaluators = Evaluators::new();
        evaluators.register("score", score_evaluation::<S>);
        evaluators.register("scoreEvaluationFunction", score_evaluation::<S>);
        evaluators
    }

    pub fn register<F>(&mut self, name: &str, eval: F)
    where
        F: Fn(&S) -> Evaluation + 'static,
    {
        self.table.insert(name.to_string(), Rc::new(eval));
    }

    pub fn get(&self, name: &str) -> Result<NamedEvaluator<S>> {
        match self.table.get(name) {
            Some(eval) => Ok(NamedEvaluator { name: name.to_string(), eval: eval.clone() }),
            None => Err(Error::UnknownEvaluator {
                name: name.to_string(),
                expected: registered_names(&self.table),
            }),
        }
    }

    /// A minimax player configured by `options`.
    pub fn minimax_agent(&self, options: &AgentOptions) -> Result<Minimax<NamedEvaluator<S>>> {
        Ok(Minimax::new(self.get(options.evaluator())?, options.depth()))
    }

    /// An alpha-beta player configured by `options`.
    pub fn alpha_beta_agent(
        &self, options: &AgentOptions,
    ) -> Result<AlphaBeta<NamedEvaluator<S>>> {
        Ok(AlphaBeta::new(self.get(options.evaluator())?, options.depth()))
    }
}

impl<S: 'static> Default for Evaluators<S> {
    fn default() -> Self {
        Evaluators::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Points(f64);

    struct Unit;

    impl Problem for Unit {
        type State = ();
        type Action = ();

        fn start_state(&self) {}

        fn is_goal_state(&self, _state: &()) -> bool {
            true
        }

        fn expand(&self, _state: &()) -> Vec<Successor<(), ()>> {
            Vec::new()
        }
    }

    impl Scored for Points {
        fn score(&self) -> Evaluation {
            self.0
        }
    }

    #[test]
    fn search_function_names() {
        assert_eq!("dfs".parse::<SearchFunction>(), Ok(SearchFunction::DepthFirst));
        assert_eq!("breadthFirstSearch".parse::<SearchFunction>(), Ok(SearchFunction::BreadthFirst));
        assert_eq!("ucs".parse::<SearchFunction>(), Ok(SearchFunction::UniformCost));
        assert_eq!("aStarSearch".parse::<SearchFunction>(), Ok(SearchFunction::AStar));
        assert!(matches!(
            "greedy".parse::<SearchFunction>(),
            Err(Error::UnknownSearchFunction { .. })
        ));
        assert!(SearchFunction::AStar.takes_heuristic());
        assert!(!SearchFunction::BreadthFirst.takes_heuristic());
    }

    #[test]
    fn score_is_registered() {
        let evaluators = Evaluators::<Points>::with_score();
        assert_eq!(evaluators.get("score").unwrap().evaluate(&Points(7.5)), 7.5);
        assert_eq!(
            evaluators.get("scoreEvaluationFunction").unwrap().evaluate(&Points(-1.0)),
            -1.0
        );
        assert!(matches!(evaluators.get("better"), Err(Error::UnknownEvaluator { .. })));
    }

    #[test]
    fn custom_evaluators() {
        let mut evaluators = Evaluators::<Points>::new();
        evaluators.register("double", |p: &Points| p.0 * 2.0);
        let eval = evaluators.get("double").unwrap();
        assert_eq!(eval.name(), "double");
        assert_eq!(eval.evaluate(&Points(3.0)), 6.0);
        assert!(evaluators.get("score").is_err());
    }

    #[test]
    fn unknown_names_list_the_registered_ones() {
        let mut evaluators = Evaluators::<Points>::with_score();
        evaluators.register("double", |p: &Points| p.0 * 2.0);
        match evaluators.get("better") {
            Err(Error::UnknownEvaluator { name, expected }) => {
                assert_eq!(name, "better");
                assert_eq!(expected, "double, score, scoreEvaluationFunction");
            }
            _ => panic!("expected an unknown evaluator error"),
        }

        let heuristics = Heuristics::<Unit>::new();
        let err = heuristics.get("euclid").err().unwrap();
        assert_eq!(
            err.to_string(),
            "unknown heuristic 'euclid'. Expected one of: null, nullHeuristic"
        );
    }
}
