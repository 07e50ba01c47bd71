//! A small pursuit game: a runner (agent 0) collects food on a grid while
//! one or more chasers (agents 1..) try to catch it. For use in tests and
//! as a runnable demo.
//!
//! Layouts use `%` for walls, `R` for the runner, `C` for each chaser and
//! `.` for food.

extern crate statesearch;

use statesearch::{Evaluation, GameState, Scored};
use std::fmt::{Display, Formatter, Result};
use std::rc::Rc;

pub const CORRIDOR: &str = "\
%%%%%%%%%
%.  R  C%
%%%%%%%%%";

pub const ARENA: &str = "\
%%%%%%%%%
%.  .  .%
% %% %% %
%R  .  C%
% %% %% %
%.  .  C%
%%%%%%%%%";

const FOOD_REWARD: Evaluation = 10.0;
const STEP_PENALTY: Evaluation = 1.0;
const WIN_REWARD: Evaluation = 500.0;
const CAUGHT_PENALTY: Evaluation = 500.0;

type Pos = (usize, usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    North,
    South,
    East,
    West,
}

impl Move {
    const ALL: [Move; 4] = [Move::North, Move::South, Move::East, Move::West];

    fn step(&self, (x, y): Pos) -> Pos {
        match *self {
            Move::North => (x, y.wrapping_sub(1)),
            Move::South => (x, y + 1),
            Move::East => (x + 1, y),
            Move::West => (x.wrapping_sub(1), y),
        }
    }
}

#[derive(Clone)]
pub struct Chase {
    walls: Rc<Vec<Vec<bool>>>,
    runner: Pos,
    chasers: Vec<Pos>,
    food: Vec<Pos>,
    score: Evaluation,
    caught: bool,
}

impl Chase {
    pub fn parse(layout: &str) -> Chase {
        let mut walls = Vec::new();
        let mut runner = (0, 0);
        let mut chasers = Vec::new();
        let mut food = Vec::new();
        for (y, line) in layout.lines().enumerate() {
            let mut row = Vec::new();
            for (x, c) in line.chars().enumerate() {
                match c {
                    'R' => runner = (x, y),
                    'C' => chasers.push((x, y)),
                    '.' => food.push((x, y)),
                    _ => {}
                }
                row.push(c == '%');
            }
            walls.push(row);
        }
        Chase { walls: Rc::new(walls), runner, chasers, food, score: 0.0, caught: false }
    }

    pub fn runner(&self) -> Pos {
        self.runner
    }

    pub fn food_left(&self) -> usize {
        self.food.len()
    }

    fn is_wall(&self, (x, y): Pos) -> bool {
        self.walls.get(y).and_then(|row| row.get(x)).copied().unwrap_or(true)
    }

    fn position(&self, agent: usize) -> Pos {
        if agent == 0 {
            self.runner
        } else {
            self.chasers[agent - 1]
        }
    }
}

impl GameState for Chase {
    type Action = Move;

    fn legal_actions(&self, agent: usize) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }
        let from = self.position(agent);
        Move::ALL.iter().copied().filter(|m| !self.is_wall(m.step(from))).collect()
    }

    fn generate_child(&self, agent: usize, action: &Move) -> Chase {
        let mut next = self.clone();
        let to = action.step(self.position(agent));
        if agent == 0 {
            next.runner = to;
            next.score -= STEP_PENALTY;
            if let Some(i) = next.food.iter().position(|&f| f == to) {
                next.food.remove(i);
                next.score += FOOD_REWARD;
                if next.food.is_empty() {
                    next.score += WIN_REWARD;
                }
            }
        } else {
            next.chasers[agent - 1] = to;
        }
        if !next.caught && !next.food.is_empty() && next.chasers.contains(&next.runner) {
            next.caught = true;
            next.score -= CAUGHT_PENALTY;
        }
        next
    }

    fn num_agents(&self) -> usize {
        1 + self.chasers.len()
    }

    fn is_win(&self) -> bool {
        self.food.is_empty()
    }

    fn is_lose(&self) -> bool {
        self.caught
    }
}

impl Scored for Chase {
    fn score(&self) -> Evaluation {
        self.score
    }
}

impl Display for Chase {
    fn fmt(&self, f: &mut Formatter) -> Result {
        for (y, row) in self.walls.iter().enumerate() {
            for (x, &wall) in row.iter().enumerate() {
                let c = if wall {
                    '%'
                } else if self.runner == (x, y) {
                    'R'
                } else if self.chasers.contains(&(x, y)) {
                    'C'
                } else if self.food.contains(&(x, y)) {
                    '.'
                } else {
                    ' '
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "score: {}", self.score)
    }
}

#[allow(dead_code)]
fn main() {
    use statesearch::util::play_game;
    use statesearch::{AgentOptions, Evaluators, Random, Strategy};

    let evaluators = Evaluators::<Chase>::with_score();
    let options = AgentOptions::new().with_depth(3);
    let mut runner = match evaluators.alpha_beta_agent(&options) {
        Ok(agent) => agent,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };
    let mut chaser1 = Random::with_seed(1);
    let mut chaser2 = Random::with_seed(2);

    let start = Chase::parse(ARENA);
    println!("{}", start);
    let mut strategies: [&mut dyn Strategy<Chase>; 3] = [&mut runner, &mut chaser1, &mut chaser2];
    let (end, rounds) = play_game(start, &mut strategies, 200);
    println!("{}", end);
    println!(
        "after {} rounds: {}",
        rounds,
        if end.is_win() {
            "runner wins"
        } else if end.is_lose() {
            "runner caught"
        } else {
            "undecided"
        }
    );
}
