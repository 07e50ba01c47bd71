extern crate statesearch;

#[path = "../demos/chase.rs"]
mod chase;

use chase::{Chase, Move, ARENA, CORRIDOR};
use statesearch::strategies::alphabeta::alpha_beta_search;
use statesearch::strategies::minimax::minimax_search;
use statesearch::util::play_game;
use statesearch::*;

// The runner needs three moves west to clear the board; any shorter horizon
// can't see the reward and falls back to the first of several equal moves.
#[test]
fn runner_heads_for_the_food() {
    let start = Chase::parse(CORRIDOR);
    let eval = score_evaluation::<Chase>;
    assert_eq!(minimax_decision(&start, 3, &eval), Some(Move::West));
    assert_eq!(alpha_beta_decision(&start, 3, &eval), Some(Move::West));
    assert_eq!(minimax_decision(&start, 1, &eval), Some(Move::East));
}

#[test]
fn runner_wins_the_corridor() {
    let evaluators = Evaluators::<Chase>::with_score();
    let options: AgentOptions = "depth=3,evalFn=score".parse().unwrap();
    let mut runner = evaluators.alpha_beta_agent(&options).unwrap();
    let mut chaser = Random::with_seed(5);
    let mut strategies: [&mut dyn Strategy<Chase>; 2] = [&mut runner, &mut chaser];
    let (end, rounds) = play_game(Chase::parse(CORRIDOR), &mut strategies, 50);
    assert!(end.is_win());
    assert_eq!(end.food_left(), 0);
    assert_eq!(rounds, 2);
    assert_eq!(end.score(), 500.0 + 10.0 - 3.0);
}

#[test]
fn minimax_and_alpha_beta_agree_with_two_chasers() {
    let start = Chase::parse(ARENA);
    assert_eq!(start.num_agents(), 3);
    let eval = score_evaluation::<Chase>;
    for depth in 0..3 {
        let (_, exact) = minimax_search(&start, depth, &eval);
        let (_, pruned) = alpha_beta_search(&start, depth, &eval);
        assert_eq!(exact, pruned, "depth={}", depth);
    }
}

#[test]
fn configured_agents_track_root_values() {
    let evaluators = Evaluators::<Chase>::with_score();
    let options = AgentOptions::new().with_depth(2);
    let mut minimax = evaluators.minimax_agent(&options).unwrap();
    let mut alpha_beta = evaluators.alpha_beta_agent(&options).unwrap();
    let start = Chase::parse(ARENA);
    let a = minimax.choose_move(&start, 0);
    let b = alpha_beta.choose_move(&start, 0);
    assert!(a.is_some());
    assert!(b.is_some());
    assert_eq!(minimax.root_value(), alpha_beta.root_value());

    let unknown = AgentOptions::new().with_evaluator("better");
    assert!(matches!(
        evaluators.minimax_agent(&unknown),
        Err(Error::UnknownEvaluator { .. })
    ));
}

#[test]
fn games_stop_after_max_rounds() {
    let mut runner = Random::with_seed(1);
    let mut c1 = Random::with_seed(2);
    let mut c2 = Random::with_seed(3);
    let mut strategies: [&mut dyn Strategy<Chase>; 3] = [&mut runner, &mut c1, &mut c2];
    let (end, rounds) = play_game(Chase::parse(ARENA), &mut strategies, 0);
    assert_eq!(rounds, 0);
    assert_eq!(end.runner(), Chase::parse(ARENA).runner());
}

#[test]
#[should_panic]
fn one_strategy_per_agent() {
    let mut runner = Random::with_seed(1);
    let mut strategies: [&mut dyn Strategy<Chase>; 1] = [&mut runner];
    play_game(Chase::parse(ARENA), &mut strategies, 10);
}
