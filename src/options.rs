//! Agent configuration.
//!
//! Options are written as comma-separated `key=value` pairs, e.g.
//! `depth=3,evalFn=score` for an adversarial agent or
//! `fn=astar,heuristic=manhattan` for a path-finding agent. Keys that are
//! left out keep their defaults.

use crate::error::{Error, Result};

use std::str::FromStr;

fn parse_pairs(input: &str) -> Result<Vec<(&str, &str)>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .map(|option| match option.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
            _ => Err(Error::MalformedOption { option: option.to_string() }),
        })
        .collect()
}

/// Options for the adversarial agents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentOptions {
    depth: usize,
    evaluator: String,
}

impl AgentOptions {
    pub fn new() -> Self {
        AgentOptions { depth: 2, evaluator: "score".to_string() }
    }

    /// How many rounds to look ahead.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Name of the evaluation function, looked up in an
    /// [`Evaluators`](crate::agents::Evaluators) registry.
    pub fn with_evaluator(mut self, name: &str) -> Self {
        self.evaluator = name.to_string();
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn evaluator(&self) -> &str {
        &self.evaluator
    }
}

impl Default for AgentOptions {
    fn default() -> Self {
        AgentOptions::new()
    }
}

impl FromStr for AgentOptions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut options = AgentOptions::new();
        for (key, value) in parse_pairs(s)? {
            match key {
                "depth" => {
                    options.depth = value.parse().map_err(|e: std::num::ParseIntError| {
                        Error::InvalidDepth { input: value.to_string(), reason: e.to_string() }
                    })?;
                }
                "evalFn" | "evaluator" => options.evaluator = value.to_string(),
                _ => {
                    return Err(Error::UnknownOption {
                        key: key.to_string(),
                        expected: "depth, evalFn".to_string(),
                    })
                }
            }
        }
        Ok(options)
    }
}

/// Options for the path-finding agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    function: String,
    heuristic: Option<String>,
}

impl SearchOptions {
    pub fn new() -> Self {
        SearchOptions { function: "depthFirstSearch".to_string(), heuristic: None }
    }

    /// Name of the search function; see
    /// [`SearchFunction`](crate::agents::SearchFunction).
    pub fn with_function(mut self, name: &str) -> Self {
        self.function = name.to_string();
        self
    }

    /// Name of the heuristic, looked up in a
    /// [`Heuristics`](crate::agents::Heuristics) registry. Only A* takes one.
    pub fn with_heuristic(mut self, name: &str) -> Self {
        self.heuristic = Some(name.to_string());
        self
    }

    pub fn function(&self) -> &str {
        &self.function
    }

    pub fn heuristic(&self) -> Option<&str> {
        self.heuristic.as_deref()
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions::new()
    }
}

impl FromStr for SearchOptions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut options = SearchOptions::new();
        for (key, value) in parse_pairs(s)? {
            match key {
                "fn" | "function" => options.function = value.to_string(),
                "heuristic" => options.heuristic = Some(value.to_string()),
                _ => {
                    return Err(Error::UnknownOption {
                        key: key.to_string(),
                        expected: "fn, heuristic".to_string(),
                    })
                }
            }
        }
        Ok(options)
    }
}
