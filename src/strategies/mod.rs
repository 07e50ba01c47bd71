//! Adversarial search strategies.

pub mod alphabeta;
pub mod minimax;
pub mod random;
mod util;
