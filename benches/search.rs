#[macro_use]
extern crate bencher;
extern crate statesearch;
#[path = "../demos/chase.rs"]
#[allow(dead_code)]
mod chase;
#[path = "../demos/maze.rs"]
#[allow(dead_code)]
mod maze;

use bencher::Bencher;
use statesearch::*;

fn bench_bfs(b: &mut Bencher) {
    let problem = maze::Maze::parse(maze::OPEN_MAZE);
    b.iter(|| {
        let path = breadth_first_search(&problem);
        assert!(!path.is_empty());
    });
}

fn bench_astar(b: &mut Bencher) {
    let problem = maze::Maze::parse(maze::OPEN_MAZE);
    b.iter(|| {
        let path = a_star_search(&problem, maze::manhattan_heuristic);
        assert!(!path.is_empty());
    });
}

fn bench_minimax(b: &mut Bencher) {
    let state = chase::Chase::parse(chase::ARENA);
    b.iter(|| {
        let m = minimax_decision(&state, 2, &score_evaluation::<chase::Chase>);
        assert!(m.is_some());
    });
}

fn bench_alpha_beta(b: &mut Bencher) {
    let state = chase::Chase::parse(chase::ARENA);
    b.iter(|| {
        let m = alpha_beta_decision(&state, 2, &score_evaluation::<chase::Chase>);
        assert!(m.is_some());
    });
}

benchmark_group!(benches, bench_bfs, bench_astar, bench_minimax, bench_alpha_beta);
benchmark_main!(benches);
