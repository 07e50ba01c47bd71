//! Error types for agent and search configuration.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("malformed option '{option}' (expected key=value)")]
    MalformedOption { option: String },

    #[error("unknown option '{key}'. Expected one of: {expected}")]
    UnknownOption { key: String, expected: String },

    #[error("invalid depth '{input}': {reason}")]
    InvalidDepth { input: String, reason: String },

    #[error("unknown search function '{name}'. Expected one of: {expected}")]
    UnknownSearchFunction { name: String, expected: String },

    #[error("unknown evaluation function '{name}'. Expected one of: {expected}")]
    UnknownEvaluator { name: String, expected: String },

    #[error("unknown heuristic '{name}'. Expected one of: {expected}")]
    UnknownHeuristic { name: String, expected: String },

    #[error("search function '{name}' does not take a heuristic")]
    UnexpectedHeuristic { name: String },
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
