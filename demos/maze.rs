//! A grid maze as a search problem, for use in tests, benchmarks and as a
//! runnable demo.
//!
//! Layouts use `%` for walls, `P` for the start and `.` for the goal.

extern crate statesearch;

use statesearch::{Cost, Problem, Successor};
use std::cell::Cell;
use std::fmt::{Display, Formatter, Result};

pub const TINY_MAZE: &str = "\
%%%%%%%
%    P%
% %%% %
%  %  %
%%   %%
%. %%%%
%%%%%%%";

pub const OPEN_MAZE: &str = "\
%%%%%%%%%%%%
%P         %
%  %%%%%%  %
%  %    %  %
%  %  % %  %
%     %   .%
%%%%%%%%%%%%";

/// `(column, row)`, with row 0 at the top.
pub type Pos = (usize, usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::North, Direction::South, Direction::East, Direction::West];

    fn step(&self, (x, y): Pos) -> Pos {
        match *self {
            Direction::North => (x, y.wrapping_sub(1)),
            Direction::South => (x, y + 1),
            Direction::East => (x + 1, y),
            Direction::West => (x.wrapping_sub(1), y),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let c = match *self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        };
        write!(f, "{}", c)
    }
}

pub struct Maze {
    walls: Vec<Vec<bool>>,
    start: Pos,
    goal: Pos,
    cost: fn(Pos) -> Cost,
    expanded: Cell<usize>,
}

impl Maze {
    pub fn parse(layout: &str) -> Maze {
        let mut walls = Vec::new();
        let mut start = (0, 0);
        let mut goal = (0, 0);
        for (y, line) in layout.lines().enumerate() {
            let mut row = Vec::new();
            for (x, c) in line.chars().enumerate() {
                match c {
                    'P' => start = (x, y),
                    '.' => goal = (x, y),
                    _ => {}
                }
                row.push(c == '%');
            }
            walls.push(row);
        }
        Maze { walls, start, goal, cost: |_| 1.0, expanded: Cell::new(0) }
    }

    /// Charge `cost(to)` for every step into `to` instead of 1.
    pub fn with_cost(mut self, cost: fn(Pos) -> Cost) -> Maze {
        self.cost = cost;
        self
    }

    pub fn goal(&self) -> Pos {
        self.goal
    }

    /// How many times `expand` has been called.
    pub fn expanded(&self) -> usize {
        self.expanded.get()
    }

    pub fn is_wall(&self, (x, y): Pos) -> bool {
        self.walls.get(y).and_then(|row| row.get(x)).copied().unwrap_or(true)
    }

    /// Follow `path` from the start, or `None` if it walks into a wall.
    pub fn walk(&self, path: &[Direction]) -> Option<Pos> {
        let mut pos = self.start;
        for d in path {
            pos = d.step(pos);
            if self.is_wall(pos) {
                return None;
            }
        }
        Some(pos)
    }
}

impl Problem for Maze {
    type State = Pos;
    type Action = Direction;

    fn start_state(&self) -> Pos {
        self.start
    }

    fn is_goal_state(&self, state: &Pos) -> bool {
        *state == self.goal
    }

    fn expand(&self, state: &Pos) -> Vec<Successor<Pos, Direction>> {
        self.expanded.set(self.expanded.get() + 1);
        Direction::ALL
            .iter()
            .map(|&d| (d, d.step(*state)))
            .filter(|&(_, next)| !self.is_wall(next))
            .map(|(d, next)| Successor::new(next, d, (self.cost)(next)))
            .collect()
    }
}

/// Manhattan distance to the goal. Admissible for unit step costs.
pub fn manhattan_heuristic(state: &Pos, maze: &Maze) -> Cost {
    let (gx, gy) = maze.goal();
    (state.0.abs_diff(gx) + state.1.abs_diff(gy)) as Cost
}

#[allow(dead_code)]
fn main() {
    use statesearch::{SearchAgent, SearchOptions};

    for options in ["fn=dfs", "fn=bfs", "fn=ucs", "fn=astar,heuristic=manhattan"] {
        let maze = Maze::parse(OPEN_MAZE);
        let mut heuristics = statesearch::Heuristics::<Maze>::new();
        heuristics.register("manhattan", manhattan_heuristic);
        let options: SearchOptions = match options.parse() {
            Ok(options) => options,
            Err(e) => {
                eprintln!("{}", e);
                return;
            }
        };
        let agent = match SearchAgent::from_options(&options, &heuristics) {
            Ok(agent) => agent,
            Err(e) => {
                eprintln!("{}", e);
                return;
            }
        };
        let path = agent.find_path(&maze);
        let expanded = maze.expanded();
        let moves: String = path.iter().map(|d| d.to_string()).collect();
        println!(
            "{:>5}: {} steps, cost {:?}, {} nodes expanded: {}",
            agent.function(),
            path.len(),
            maze.cost_of_actions(&path),
            expanded,
            moves
        );
    }
}
