//! A strategy that randomly chooses a move, for opponents and tests.

use super::super::interface::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Plays a uniformly random legal move for whichever agent it is asked
/// about.
pub struct Random {
    rng: StdRng,
}

impl Random {
    pub fn new() -> Random {
        Random { rng: StdRng::from_entropy() }
    }

    /// A reproducible random player.
    pub fn with_seed(seed: u64) -> Random {
        Random { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for Random {
    fn default() -> Self {
        Random::new()
    }
}

impl<S: GameState> Strategy<S> for Random {
    fn choose_move(&mut self, state: &S, agent: usize) -> Option<S::Action> {
        state.legal_actions(agent).choose(&mut self.rng).cloned()
    }
}
