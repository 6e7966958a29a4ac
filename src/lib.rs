// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

pub mod board;
pub mod board_formatter;
pub mod config;
pub mod data;
pub mod puzzle;
pub mod solver;
pub mod trace_formatter;

mod fs;
mod parser;
mod vec2d;

use std::error::Error;

use crate::config::{Method, SolverConfig};
use crate::puzzle::Puzzle;
use crate::solver::{SolverErr, SolverOk};

pub use crate::board::Board;
pub use crate::parser::ParserErr;

pub trait LoadPuzzle {
    fn load_puzzle(&self) -> Result<Puzzle, Box<dyn Error>>;
}

impl LoadPuzzle for str {
    fn load_puzzle(&self) -> Result<Puzzle, Box<dyn Error>> {
        let puzzle: Puzzle = fs::read_puzzle_file(self)?.parse()?;
        Ok(puzzle)
    }
}

pub trait Solve {
    fn solve(&self, method: Method, config: &SolverConfig) -> Result<SolverOk, SolverErr>;
}
