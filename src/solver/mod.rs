mod frontier;
pub mod heuristic;
mod stats;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::{debug, trace};

use crate::board::Board;
use crate::config::{Format, FrontierMode, Method, SolverConfig, TargetTable};
use crate::data::DIRECTIONS;
use crate::puzzle::Puzzle;
use crate::trace_formatter::TraceFormatter;
use crate::Solve;

use self::frontier::{Frontier, GreedyFrontier, StackFrontier};
pub use self::heuristic::{heuristic, Targets};
pub use self::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    SizeMismatch,
    DuplicatePiece(char),
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::SizeMismatch => write!(f, "Initial and goal boards have different sizes"),
            SolverErr::DuplicatePiece(label) => {
                write!(f, "Piece {} is on a board more than once", label)
            }
        }
    }
}

impl Error for SolverErr {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    /// The frontier ran out, the goal is not reachable.
    Exhausted,
    /// Stopped by `SolverConfig::max_expansions`.
    LimitReached,
}

pub struct SolverOk {
    /// Every board popped from the frontier, in order.
    /// When solved, the last one is the goal.
    pub trace: Vec<Board>,
    pub outcome: Outcome,
    pub stats: Stats,
    pub method: Method,
}

impl SolverOk {
    fn new(trace: Vec<Board>, outcome: Outcome, stats: Stats, method: Method) -> Self {
        Self {
            trace,
            outcome,
            stats,
            method,
        }
    }

    pub fn solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }

    pub fn format_trace(&self, format: Format) -> TraceFormatter<'_> {
        TraceFormatter::new(&self.trace, format)
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Solved => writeln!(f, "{}: {} expanded", self.method, self.trace.len())?,
            Outcome::Exhausted => writeln!(f, "No solution")?,
            Outcome::LimitReached => writeln!(f, "Limit reached")?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Puzzle {
    fn solve(&self, method: Method, config: &SolverConfig) -> Result<SolverOk, SolverErr> {
        match method {
            Method::Exhaustive => exhaustive_search(self, config),
            Method::Greedy => greedy_search(self, config),
        }
    }
}

/// Depth first search with an explicit stack, ignores the heuristic.
pub fn exhaustive_search(puzzle: &Puzzle, config: &SolverConfig) -> Result<SolverOk, SolverErr> {
    check_puzzle(puzzle)?;
    Ok(search(
        puzzle,
        Method::Exhaustive,
        config,
        StackFrontier::new(),
    ))
}

/// Greedy best first search - expands the board with the lowest heuristic value.
/// Carries no path cost so it's not A*.
pub fn greedy_search(puzzle: &Puzzle, config: &SolverConfig) -> Result<SolverOk, SolverErr> {
    check_puzzle(puzzle)?;
    let targets = match config.targets {
        TargetTable::Canonical => Targets::canonical(),
        TargetTable::FromGoal => Targets::from_goal(&puzzle.goal),
    };
    Ok(search(
        puzzle,
        Method::Greedy,
        config,
        GreedyFrontier::new(&targets),
    ))
}

fn check_puzzle(puzzle: &Puzzle) -> Result<(), SolverErr> {
    if puzzle.initial.size() != puzzle.goal.size() {
        return Err(SolverErr::SizeMismatch);
    }
    for board in &[&puzzle.initial, &puzzle.goal] {
        let labels = board.labels();
        if let Some(pair) = labels.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(SolverErr::DuplicatePiece(pair[0]));
        }
    }
    Ok(())
}

fn search<F: Frontier>(
    puzzle: &Puzzle,
    method: Method,
    config: &SolverConfig,
    mut frontier: F,
) -> SolverOk {
    debug!(
        "Search called: {}, {} frontier, limit {:?}",
        method, config.frontier, config.max_expansions
    );

    let mut stats = Stats::new();
    let mut trace = Vec::new();
    let mut visited = FnvHashSet::default();
    // only used by the strict frontier - everything ever pushed
    let mut queued = FnvHashSet::default();

    if config.frontier == FrontierMode::Strict {
        queued.insert(puzzle.initial.clone());
    }
    frontier.push(puzzle.initial.clone());
    stats.add_created(frontier.len());

    while let Some(cur) = frontier.pop() {
        // record before the goal check so the goal itself is part of the trace
        trace.push(cur.clone());

        if stats.add_expanded(visited.contains(&cur)) {
            trace!("{:?}", stats);
        }

        if is_goal(&cur, &puzzle.goal) {
            debug!("Solved after {} expansions", trace.len());
            return SolverOk::new(trace, Outcome::Solved, stats, method);
        }

        if let Some(limit) = config.max_expansions {
            if trace.len() >= limit {
                debug!("Reached limit of {} expansions", limit);
                return SolverOk::new(trace, Outcome::LimitReached, stats, method);
            }
        }

        let successors = generate_successors(&cur);
        visited.insert(cur);

        for next in successors {
            if visited.contains(&next) {
                stats.add_skipped();
                continue;
            }
            if config.frontier == FrontierMode::Strict && !queued.insert(next.clone()) {
                stats.add_skipped();
                continue;
            }
            frontier.push(next);
            stats.add_created(frontier.len());
        }
    }

    debug!("Frontier exhausted after {} expansions", trace.len());
    SolverOk::new(trace, Outcome::Exhausted, stats, method)
}

pub fn is_goal(board: &Board, goal: &Board) -> bool {
    board == goal
}

/// Every board reachable by sliding one piece into an adjacent empty cell.
///
/// Pieces are taken in row-major order, directions in the order up, down, left, right.
pub fn generate_successors(board: &Board) -> Vec<Board> {
    let grid = board.grid();
    let mut successors = Vec::new();

    for (pos, _) in board.pieces() {
        for &dir in &DIRECTIONS {
            if let Some(new_pos) = grid.neighbor(pos, dir) {
                if grid[new_pos].is_empty() {
                    successors.push(board.with_move(pos, new_pos));
                }
            }
        }
    }

    successors
}
