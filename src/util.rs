//! Utility functions for driving games.

use super::interface::{GameState, Strategy};

use log::debug;

/// Play `state` out with one strategy per agent, in index order, until the
/// game is decided, an agent has no move, or `max_rounds` full rounds have
/// been played.
///
/// Returns the final state and the number of rounds completed.
pub fn play_game<S>(
    mut state: S, strategies: &mut [&mut dyn Strategy<S>], max_rounds: usize,
) -> (S, usize)
where
    S: GameState,
{
    assert_eq!(
        strategies.len(),
        state.num_agents(),
        "play_game needs exactly one strategy per agent"
    );
    let mut rounds = 0;
    while rounds < max_rounds {
        for (agent, strategy) in strategies.iter_mut().enumerate() {
            if state.is_terminal() {
                debug!("game decided after {} rounds (win: {})", rounds, state.is_win());
                return (state, rounds);
            }
            match strategy.choose_move(&state, agent) {
                Some(action) => state = state.generate_child(agent, &action),
                None => {
                    debug!("agent {} has no move after {} rounds", agent, rounds);
                    return (state, rounds);
                }
            }
        }
        rounds += 1;
    }
    (state, rounds)
}
